use crate::barnes_hut::{gravitational_force, Occupant, QuadNode, QuadTree};
use crate::models::{Body, Vector2D};

impl<'a> Occupant<'a> {
    /// Force this leaf content exerts on `target`. A body never attracts itself.
    pub fn force_on(&self, target: &Body, target_index: Option<usize>, g: f64) -> Vector2D {
        match self {
            Occupant::Single { index, body } => {
                if Some(*index) == target_index {
                    Vector2D::ZERO
                } else {
                    gravitational_force(target, body, g)
                }
            }
            Occupant::Merged { aggregate, members } => {
                if members.iter().any(|(index, _)| Some(*index) == target_index) {
                    members
                        .iter()
                        .filter(|(index, _)| Some(*index) != target_index)
                        .map(|(_, body)| gravitational_force(target, body, g))
                        .sum()
                } else {
                    gravitational_force(target, aggregate, g)
                }
            }
        }
    }
}

impl<'a> QuadNode<'a> {
    /// Computes the net force exerted on `target` by the mass below this node.
    ///
    /// This is the core of the Barnes-Hut approximation:
    /// - an empty leaf exerts no force
    /// - an occupied leaf exerts its exact force, except on the body it holds
    /// - an internal node whose width `s` and distance `d` to its centre of
    ///   mass satisfy `s / d < theta` acts as a single point mass
    /// - otherwise the four children are visited and their forces summed
    ///
    /// A node whose subtree holds the target is always opened, so the
    /// target's own mass never enters an aggregate it is pulled by. Nodes on
    /// the target's insertion path are found with the same midpoint rule the
    /// tree uses when inserting. A target sitting exactly on an internal
    /// node's centre of mass also opens the node.
    ///
    /// `target_index` is the target's position in the universe the tree was
    /// built from, or `None` for a probe body that is not in the tree.
    ///
    /// # Arguments
    ///
    /// * `target` - The body to compute the force on
    /// * `target_index` - Index of `target` in the tree's universe, if present
    /// * `theta` - The opening-angle threshold; `0.0` gives exact summation
    /// * `g` - The gravitational constant
    pub fn net_force(&self, target: &Body, target_index: Option<usize>, theta: f64, g: f64) -> Vector2D {
        self.accumulate_force(target, target_index, target_index.is_some(), theta, g)
    }

    fn accumulate_force(
        &self,
        target: &Body,
        target_index: Option<usize>,
        holds_target: bool,
        theta: f64,
        g: f64,
    ) -> Vector2D {
        match self {
            QuadNode::Leaf { occupant: None, .. } => Vector2D::ZERO,
            QuadNode::Leaf { occupant: Some(occupant), .. } => occupant.force_on(target, target_index, g),
            QuadNode::Internal { quadrant, aggregate, children } => {
                let d = target.position.distance(aggregate.position);
                if !holds_target && d != 0.0 && quadrant.width / d < theta {
                    return gravitational_force(target, aggregate, g);
                }
                let target_child = quadrant.child_index(target.position);
                children
                    .iter()
                    .enumerate()
                    .map(|(i, child)| {
                        child.accumulate_force(target, target_index, holds_target && i == target_child, theta, g)
                    })
                    .sum()
            }
        }
    }
}

impl<'a> QuadTree<'a> {
    /// Net gravitational force on `target` from every other body in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_nbody::barnes_hut::QuadTree;
    /// use rs_nbody::models::{Body, Universe, Vector2D};
    ///
    /// let bodies = vec![
    ///     Body::new("left", 1.0, 0.0, Vector2D::new(2.0, 5.0), Vector2D::ZERO).unwrap(),
    ///     Body::new("right", 1.0, 0.0, Vector2D::new(8.0, 5.0), Vector2D::ZERO).unwrap(),
    /// ];
    /// let universe = Universe::new(10.0, bodies).unwrap();
    /// let tree = QuadTree::build(&universe).unwrap();
    ///
    /// // A probe halfway between two equal masses feels no net pull.
    /// let probe = Body::new("probe", 1.0, 0.0, Vector2D::new(5.0, 5.0), Vector2D::ZERO).unwrap();
    /// let force = tree.net_force(&probe, None, 0.5, 1.0);
    /// assert!(force.length() < 1e-12);
    ///
    /// // The left body is pulled to the right.
    /// let on_left = tree.net_force(&universe.bodies[0], Some(0), 0.5, 1.0);
    /// assert!(on_left.x > 0.0);
    /// ```
    pub fn net_force(&self, target: &Body, target_index: Option<usize>, theta: f64, g: f64) -> Vector2D {
        self.root().net_force(target, target_index, theta, g)
    }
}
