use std::fmt;
use std::error::Error;

/// Represents errors that can occur while building or running a simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Indicates an invalid mass value (negative, zero or non-finite).
    InvalidMass,
    /// Indicates an invalid radius value (negative or non-finite).
    InvalidRadius,
    /// Indicates an invalid universe or quadrant width (non-positive or non-finite).
    InvalidWidth,
    /// Indicates an invalid time step (non-positive or non-finite).
    InvalidTimeStep,
    /// Indicates an invalid gravitational constant (non-positive or non-finite).
    InvalidGravitationalConstant,
    /// Indicates an invalid Barnes-Hut opening angle (negative or non-finite).
    InvalidTheta,
    /// A vector quantity contains a NaN or infinite component.
    NonFiniteValue(String),
    /// A body lies outside the universe's bounding square.
    OutOfBounds { index: usize, x: f64, y: f64, width: f64 },
    /// Integration produced a NaN or infinite state for the body at `index`.
    NonFiniteState { index: usize },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PhysicsError::InvalidMass => write!(f, "Invalid mass value"),
            PhysicsError::InvalidRadius => write!(f, "Invalid radius value"),
            PhysicsError::InvalidWidth => write!(f, "Invalid width value"),
            PhysicsError::InvalidTimeStep => write!(f, "Invalid time step"),
            PhysicsError::InvalidGravitationalConstant => write!(f, "Invalid gravitational constant"),
            PhysicsError::InvalidTheta => write!(f, "Invalid theta value"),
            PhysicsError::NonFiniteValue(what) => write!(f, "Non-finite value: {}", what),
            PhysicsError::OutOfBounds { index, x, y, width } => write!(
                f,
                "Body {} at ({}, {}) lies outside the universe [0, {}] x [0, {}]",
                index, x, y, width, width
            ),
            PhysicsError::NonFiniteState { index } => {
                write!(f, "Body {} reached a non-finite state", index)
            }
        }
    }
}

impl Error for PhysicsError {}
