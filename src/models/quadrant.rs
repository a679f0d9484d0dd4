use crate::models::Vector2D;
use crate::utils::PhysicsError;

pub const NW: usize = 0;
pub const NE: usize = 1;
pub const SW: usize = 2;
pub const SE: usize = 3;

/// An axis-aligned square region `[x, x + width] × [y, y + width]`.
///
/// `(x, y)` is the lower-left corner. Quadrants bound the nodes of the
/// Barnes-Hut quadtree.
///
/// # Examples
///
/// ```
/// use rs_nbody::models::{Quadrant, Vector2D};
///
/// let quadrant = Quadrant::new(0.0, 0.0, 2.0).unwrap();
///
/// assert!(quadrant.contains(Vector2D::new(1.0, 1.0)));
/// assert!(quadrant.contains(Vector2D::new(2.0, 2.0))); // edges are inclusive
/// assert!(!quadrant.contains(Vector2D::new(2.5, 1.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadrant {
    pub x: f64,
    pub y: f64,
    pub width: f64,
}

impl Quadrant {
    pub fn new(x: f64, y: f64, width: f64) -> Result<Self, PhysicsError> {
        if !width.is_finite() || width <= 0.0 {
            return Err(PhysicsError::InvalidWidth);
        }
        Vector2D::new(x, y).ensure_finite("quadrant corner")?;
        Ok(Quadrant { x, y, width })
    }

    pub fn midpoint(&self) -> Vector2D {
        let half = self.width / 2.0;
        Vector2D::new(self.x + half, self.y + half)
    }

    /// Returns true if `point` lies inside the closed square.
    pub fn contains(&self, point: Vector2D) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.width
    }

    /// Index of the child quadrant (`NW`, `NE`, `SW`, `SE`) that `point` falls into.
    ///
    /// Points on a dividing line go to the upper/right child.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_nbody::models::{Quadrant, Vector2D, NE, NW, SE, SW};
    ///
    /// let quadrant = Quadrant::new(0.0, 0.0, 10.0).unwrap();
    ///
    /// assert_eq!(quadrant.child_index(Vector2D::new(1.0, 9.0)), NW);
    /// assert_eq!(quadrant.child_index(Vector2D::new(9.0, 9.0)), NE);
    /// assert_eq!(quadrant.child_index(Vector2D::new(1.0, 1.0)), SW);
    /// assert_eq!(quadrant.child_index(Vector2D::new(9.0, 1.0)), SE);
    /// assert_eq!(quadrant.child_index(Vector2D::new(5.0, 5.0)), NE);
    /// ```
    pub fn child_index(&self, point: Vector2D) -> usize {
        let mid = self.midpoint();
        let is_east = point.x >= mid.x;
        let is_north = point.y >= mid.y;

        match (is_north, is_east) {
            (true, false) => NW,
            (true, true) => NE,
            (false, false) => SW,
            (false, true) => SE,
        }
    }

    /// Splits the quadrant into four children of half the width, ordered
    /// `[NW, NE, SW, SE]`.
    pub fn subdivide(&self) -> [Quadrant; 4] {
        let half = self.width / 2.0;
        [
            Quadrant { x: self.x, y: self.y + half, width: half },        // NW
            Quadrant { x: self.x + half, y: self.y + half, width: half }, // NE
            Quadrant { x: self.x, y: self.y, width: half },               // SW
            Quadrant { x: self.x + half, y: self.y, width: half },        // SE
        ]
    }
}
