use log::{debug, log_enabled, warn, Level};

use crate::models::{Body, Quadrant, Universe, Vector2D};
use crate::utils::{PhysicsError, MAX_TREE_DEPTH};

/// Content of an occupied leaf.
#[derive(Debug, Clone)]
pub enum Occupant<'a> {
    /// A single real body and its index in the universe it was taken from.
    Single { index: usize, body: &'a Body },
    /// Bodies the tree could not separate before reaching `MAX_TREE_DEPTH`,
    /// merged into one aggregate.
    Merged { aggregate: Body, members: Vec<(usize, &'a Body)> },
}

impl<'a> Occupant<'a> {
    pub fn mass(&self) -> f64 {
        match self {
            Occupant::Single { body, .. } => body.mass,
            Occupant::Merged { aggregate, .. } => aggregate.mass,
        }
    }

    pub fn position(&self) -> Vector2D {
        match self {
            Occupant::Single { body, .. } => body.position,
            Occupant::Merged { aggregate, .. } => aggregate.position,
        }
    }

    pub fn body_count(&self) -> usize {
        match self {
            Occupant::Single { .. } => 1,
            Occupant::Merged { members, .. } => members.len(),
        }
    }

    fn into_members(self) -> Vec<(usize, &'a Body)> {
        match self {
            Occupant::Single { index, body } => vec![(index, body)],
            Occupant::Merged { members, .. } => members,
        }
    }

    fn merge(self, other: Occupant<'a>) -> Occupant<'a> {
        let mass = self.mass() + other.mass();
        let position = (self.position() * self.mass() + other.position() * other.mass()) / mass;
        let mut members = self.into_members();
        members.extend(other.into_members());
        Occupant::Merged { aggregate: Body::aggregate(mass, position), members }
    }
}

/// A node of the Barnes-Hut quadtree.
///
/// A `Leaf` holds at most one occupant and has no children. An `Internal`
/// node always has exactly four children, ordered `[NW, NE, SW, SE]`, and an
/// aggregate body carrying the total mass and centre of mass of its subtree.
#[derive(Debug, Clone)]
pub enum QuadNode<'a> {
    Leaf {
        quadrant: Quadrant,
        occupant: Option<Occupant<'a>>,
    },
    Internal {
        quadrant: Quadrant,
        aggregate: Body,
        children: Box<[QuadNode<'a>; 4]>,
    },
}

impl<'a> QuadNode<'a> {
    /// Creates an empty leaf covering `quadrant`.
    pub fn new(quadrant: Quadrant) -> Self {
        QuadNode::Leaf { quadrant, occupant: None }
    }

    pub fn quadrant(&self) -> Quadrant {
        match self {
            QuadNode::Leaf { quadrant, .. } => *quadrant,
            QuadNode::Internal { quadrant, .. } => *quadrant,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, QuadNode::Leaf { .. })
    }

    /// Total mass and centre of mass of everything below this node, or `None`
    /// for an empty leaf.
    pub fn mass_and_centroid(&self) -> Option<(f64, Vector2D)> {
        match self {
            QuadNode::Leaf { occupant: None, .. } => None,
            QuadNode::Leaf { occupant: Some(occupant), .. } => Some((occupant.mass(), occupant.position())),
            QuadNode::Internal { aggregate, .. } => Some((aggregate.mass, aggregate.position)),
        }
    }

    /// Inserts `incoming` below this node. `depth` is the depth of this node.
    fn insert(&mut self, incoming: Occupant<'a>, depth: usize) {
        match self {
            QuadNode::Leaf { quadrant, occupant } => match occupant.take() {
                None => *occupant = Some(incoming),
                Some(existing) if depth >= MAX_TREE_DEPTH => {
                    warn!(
                        "Quadtree reached depth {} at ({}, {}); merging {} coincident bodies into one leaf",
                        depth,
                        existing.position().x,
                        existing.position().y,
                        existing.body_count() + incoming.body_count()
                    );
                    *occupant = Some(existing.merge(incoming));
                }
                Some(existing) => {
                    let quadrant = *quadrant;
                    let children = quadrant.subdivide().map(QuadNode::new);
                    *self = QuadNode::Internal {
                        quadrant,
                        aggregate: Body::aggregate(0.0, Vector2D::ZERO),
                        children: Box::new(children),
                    };
                    self.insert(existing, depth);
                    self.insert(incoming, depth);
                }
            },
            QuadNode::Internal { quadrant, aggregate, children } => {
                let child = quadrant.child_index(incoming.position());
                children[child].insert(incoming, depth + 1);
                *aggregate = aggregate_of(children);
            }
        }
    }

    /// Number of levels below this node; a lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            QuadNode::Leaf { .. } => 0,
            QuadNode::Internal { children, .. } => {
                1 + children.iter().map(QuadNode::depth).max().unwrap_or(0)
            }
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            QuadNode::Leaf { .. } => 1,
            QuadNode::Internal { children, .. } => 1 + children.iter().map(QuadNode::node_count).sum::<usize>(),
        }
    }

    /// Number of real bodies stored below this node.
    pub fn body_count(&self) -> usize {
        match self {
            QuadNode::Leaf { occupant, .. } => occupant.as_ref().map_or(0, Occupant::body_count),
            QuadNode::Internal { children, .. } => children.iter().map(QuadNode::body_count).sum(),
        }
    }
}

/// Recomputes an internal node's aggregate from its four children.
fn aggregate_of(children: &[QuadNode<'_>; 4]) -> Body {
    let (mass, weighted) = children
        .iter()
        .filter_map(QuadNode::mass_and_centroid)
        .fold((0.0, Vector2D::ZERO), |(mass, weighted), (m, p)| (mass + m, weighted + p * m));
    Body::aggregate(mass, weighted / mass)
}

/// Barnes-Hut quadtree over the bodies of one universe snapshot.
///
/// The tree borrows the bodies it indexes, so it cannot outlive the snapshot
/// it was built from. It is meant to be built, queried, and dropped within a
/// single generation.
///
/// # Examples
///
/// ```
/// use rs_nbody::barnes_hut::QuadTree;
/// use rs_nbody::models::{Body, Universe, Vector2D};
///
/// let bodies = vec![
///     Body::new("a", 1.0, 0.0, Vector2D::new(1.0, 1.0), Vector2D::ZERO).unwrap(),
///     Body::new("b", 3.0, 0.0, Vector2D::new(9.0, 1.0), Vector2D::ZERO).unwrap(),
/// ];
/// let universe = Universe::new(10.0, bodies).unwrap();
///
/// let tree = QuadTree::build(&universe).unwrap();
/// assert_eq!(tree.total_mass(), 4.0);
/// assert_eq!(tree.center_of_mass(), Some(Vector2D::new(7.0, 1.0)));
/// ```
#[derive(Debug, Clone)]
pub struct QuadTree<'a> {
    quadrant: Quadrant,
    root: QuadNode<'a>,
}

impl<'a> QuadTree<'a> {
    /// Creates an empty tree whose root covers `quadrant`.
    pub fn new(quadrant: Quadrant) -> Self {
        QuadTree { quadrant, root: QuadNode::new(quadrant) }
    }

    /// Builds a tree containing every body of `universe`, in order.
    ///
    /// # Errors
    ///
    /// Returns `PhysicsError::OutOfBounds` if a body lies outside the universe.
    pub fn build(universe: &'a Universe) -> Result<Self, PhysicsError> {
        let mut tree = QuadTree::new(universe.bounds()?);
        for (index, body) in universe.bodies.iter().enumerate() {
            tree.insert(index, body)?;
        }
        if log_enabled!(Level::Debug) {
            debug!(
                "Built quadtree over {} bodies: {} nodes, depth {}",
                tree.body_count(),
                tree.node_count(),
                tree.depth()
            );
        }
        Ok(tree)
    }

    /// Inserts `body`, identified by its `index` in the owning universe.
    ///
    /// # Errors
    ///
    /// Returns `PhysicsError::OutOfBounds` if the position is outside the root
    /// quadrant (or not finite) and `PhysicsError::InvalidMass` for a
    /// non-positive mass.
    pub fn insert(&mut self, index: usize, body: &'a Body) -> Result<(), PhysicsError> {
        if !body.position.is_finite() || !self.quadrant.contains(body.position) {
            return Err(PhysicsError::OutOfBounds {
                index,
                x: body.position.x,
                y: body.position.y,
                width: self.quadrant.width,
            });
        }
        if !body.mass.is_finite() || body.mass <= 0.0 {
            return Err(PhysicsError::InvalidMass);
        }
        self.root.insert(Occupant::Single { index, body }, 0);
        Ok(())
    }

    pub fn root(&self) -> &QuadNode<'a> {
        &self.root
    }

    pub fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    pub fn total_mass(&self) -> f64 {
        self.root.mass_and_centroid().map_or(0.0, |(mass, _)| mass)
    }

    pub fn center_of_mass(&self) -> Option<Vector2D> {
        self.root.mass_and_centroid().map(|(_, centroid)| centroid)
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    pub fn body_count(&self) -> usize {
        self.root.body_count()
    }
}
