use crate::barnes_hut::center_of_gravity;
use crate::models::{Body, Quadrant, Vector2D};
use crate::utils::PhysicsError;

/// One consistent state of the simulated system at a single instant.
///
/// The universe is the square `[0, width] × [0, width]`. The gravitational
/// constant is not stored here; it belongs to the run's `PhysicsConstants`.
#[derive(Debug, Clone, PartialEq)]
pub struct Universe {
    pub width: f64,
    pub bodies: Vec<Body>,
}

impl Universe {
    /// Creates a universe after validating its width and every body.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_nbody::models::{Body, Universe, Vector2D};
    ///
    /// let sun = Body::new("Sun", 2.0e30, 7.0e8, Vector2D::new(5.0e11, 5.0e11), Vector2D::ZERO).unwrap();
    /// let universe = Universe::new(1.0e12, vec![sun]).unwrap();
    /// assert_eq!(universe.bodies.len(), 1);
    ///
    /// assert!(Universe::new(0.0, Vec::new()).is_err());
    /// ```
    pub fn new(width: f64, bodies: Vec<Body>) -> Result<Self, PhysicsError> {
        let universe = Universe { width, bodies };
        universe.validate()?;
        Ok(universe)
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(PhysicsError::InvalidWidth);
        }
        self.bodies.iter().try_for_each(Body::validate)
    }

    /// The square covering the whole universe, used as the quadtree root.
    pub fn bounds(&self) -> Result<Quadrant, PhysicsError> {
        Quadrant::new(0.0, 0.0, self.width)
    }

    /// Returns true if `point` lies within the universe (edges included).
    pub fn in_field(&self, point: Vector2D) -> bool {
        self.bounds().map_or(false, |bounds| bounds.contains(point))
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.mass).sum()
    }

    pub fn total_momentum(&self) -> Vector2D {
        self.bodies.iter().map(Body::momentum).sum()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    pub fn center_of_mass(&self) -> Vector2D {
        center_of_gravity(&self.bodies)
    }
}
