use crate::models::Vector2D;
use crate::utils::PhysicsError;

/// Display colour of a body. Has no influence on the physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb { red: 255, green: 255, blue: 255 }
    }
}

/// A point mass in the simulated universe.
///
/// A `Body` belongs to exactly one `Universe` snapshot. The integrator never
/// edits a body in place; each generation produces a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: String,
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub acceleration: Vector2D,
    pub mass: f64,
    pub radius: f64,
    pub color: Rgb,
}

impl Body {
    /// Creates a body with the given initial conditions and zero acceleration.
    ///
    /// # Errors
    ///
    /// Returns an error if `mass` is not strictly positive, `radius` is negative,
    /// or any component is not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_nbody::models::{Body, Vector2D};
    ///
    /// let moon = Body::new("Io", 8.9e22, 1.8e6, Vector2D::new(4.2e8, 0.0), Vector2D::new(0.0, 1.7e4))
    ///     .expect("valid body");
    /// assert_eq!(moon.acceleration, Vector2D::ZERO);
    ///
    /// assert!(Body::new("ghost", 0.0, 1.0, Vector2D::ZERO, Vector2D::ZERO).is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        mass: f64,
        radius: f64,
        position: Vector2D,
        velocity: Vector2D,
    ) -> Result<Self, PhysicsError> {
        let body = Body {
            name: name.into(),
            position,
            velocity,
            acceleration: Vector2D::ZERO,
            mass,
            radius,
            color: Rgb::default(),
        };
        body.validate()?;
        Ok(body)
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    /// A synthetic, anonymous body standing in for a group of real ones.
    pub(crate) fn aggregate(mass: f64, position: Vector2D) -> Self {
        Body {
            name: String::new(),
            position,
            velocity: Vector2D::ZERO,
            acceleration: Vector2D::ZERO,
            mass,
            radius: 0.0,
            color: Rgb::default(),
        }
    }

    pub fn momentum(&self) -> Vector2D {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// Checks the invariants every body in a simulation state must satisfy.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(PhysicsError::InvalidMass);
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(PhysicsError::InvalidRadius);
        }
        self.position.ensure_finite("position")?;
        self.velocity.ensure_finite("velocity")?;
        self.acceleration.ensure_finite("acceleration")?;
        Ok(())
    }
}
