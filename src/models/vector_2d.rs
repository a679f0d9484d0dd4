use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};

use crate::utils::PhysicsError;

/// A 2D vector used for positions, velocities, accelerations and forces.
///
/// Vectors are plain `Copy` values; every arithmetic operation returns a new
/// vector rather than modifying its operands.
///
/// # Example
/// ```
/// use rs_nbody::models::Vector2D;
///
/// let a = Vector2D::new(3.0, 4.0);
/// let b = Vector2D::new(1.0, 1.0);
///
/// assert_eq!(a.length(), 5.0);
/// assert_eq!(a + b, Vector2D::new(4.0, 5.0));
/// assert_eq!(a * 2.0, Vector2D::new(6.0, 8.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    pub fn dot(&self, other: Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn length_squared(&self) -> f64 {
        self.dot(*self)
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance between two points.
    ///
    /// # Example
    /// ```
    /// use rs_nbody::models::Vector2D;
    ///
    /// let origin = Vector2D::ZERO;
    /// let p = Vector2D::new(6.0, 8.0);
    /// assert_eq!(origin.distance(p), 10.0);
    /// ```
    pub fn distance(&self, other: Vector2D) -> f64 {
        (other - *self).length()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Returns an error naming `what` if either component is NaN or infinite.
    pub fn ensure_finite(&self, what: &str) -> Result<(), PhysicsError> {
        if self.is_finite() {
            Ok(())
        } else {
            Err(PhysicsError::NonFiniteValue(format!("{} = ({}, {})", what, self.x, self.y)))
        }
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Vector2D) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector2D {
    fn sub_assign(&mut self, rhs: Vector2D) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, rhs: f64) -> Vector2D {
        Vector2D::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vector2D> for f64 {
    type Output = Vector2D;

    fn mul(self, rhs: Vector2D) -> Vector2D {
        rhs * self
    }
}

impl Div<f64> for Vector2D {
    type Output = Vector2D;

    fn div(self, rhs: f64) -> Vector2D {
        Vector2D::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}

impl Sum for Vector2D {
    fn sum<I: Iterator<Item = Vector2D>>(iter: I) -> Vector2D {
        iter.fold(Vector2D::ZERO, |acc, v| acc + v)
    }
}

impl From<(f64, f64)> for Vector2D {
    fn from(coords: (f64, f64)) -> Self {
        Vector2D::new(coords.0, coords.1)
    }
}

impl AbsDiffEq for Vector2D {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.x, &other.x, epsilon) && f64::abs_diff_eq(&self.y, &other.y, epsilon)
    }
}

impl RelativeEq for Vector2D {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && f64::relative_eq(&self.y, &other.y, epsilon, max_relative)
    }
}
