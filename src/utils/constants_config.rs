// src/utils/constants_config.rs
use crate::utils::{
    DEFAULT_PHYSICS_CONSTANTS,
    errors::PhysicsError
};

/// Constants shared by every snapshot of one simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsConstants {
    pub gravitational_constant: f64,
}

impl Default for PhysicsConstants {
    fn default() -> Self {
        DEFAULT_PHYSICS_CONSTANTS
    }
}

impl PhysicsConstants {
    /// Builds a set of constants, falling back to the SI defaults.
    ///
    /// # Example
    /// ```
    /// use rs_nbody::utils::PhysicsConstants;
    ///
    /// let scaled = PhysicsConstants::new(Some(1.0));
    /// assert_eq!(scaled.gravitational_constant, 1.0);
    ///
    /// let si = PhysicsConstants::new(None);
    /// assert_eq!(si.gravitational_constant, 6.674e-11);
    /// ```
    pub fn new(gravitational_constant: Option<f64>) -> Self {
        let default = DEFAULT_PHYSICS_CONSTANTS;
        Self {
            gravitational_constant: gravitational_constant.unwrap_or(default.gravitational_constant),
        }
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !self.gravitational_constant.is_finite() || self.gravitational_constant <= 0.0 {
            return Err(PhysicsError::InvalidGravitationalConstant);
        }
        Ok(())
    }
}

/// Checks a time step the way every driver entry point needs it.
pub fn validate_time_step(time_step: f64) -> Result<(), PhysicsError> {
    if !time_step.is_finite() || time_step <= 0.0 {
        return Err(PhysicsError::InvalidTimeStep);
    }
    Ok(())
}

/// Theta may be zero (exact summation) but never negative.
pub fn validate_theta(theta: f64) -> Result<(), PhysicsError> {
    if !theta.is_finite() || theta < 0.0 {
        return Err(PhysicsError::InvalidTheta);
    }
    Ok(())
}
