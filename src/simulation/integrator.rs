//! Second-order time integration of a single body.
//!
//! The velocity uses the average of the old and new accelerations
//! (trapezoidal rule) while the position uses constant-acceleration
//! kinematics with the old acceleration and velocity, in the
//! velocity-Verlet family.
use crate::models::{Body, Vector2D};
use crate::utils::PhysicsError;

/// `a = F / m`.
pub fn update_acceleration(net_force: Vector2D, mass: f64) -> Vector2D {
    net_force / mass
}

/// `v_new = v_old + 0.5 * (a_old + a_new) * dt`
///
/// # Examples
///
/// ```
/// use rs_nbody::models::Vector2D;
/// use rs_nbody::simulation::update_velocity;
///
/// let v = update_velocity(Vector2D::new(1.0, 0.0), Vector2D::new(0.0, 2.0), Vector2D::new(0.0, 4.0), 0.5);
/// assert_eq!(v, Vector2D::new(1.0, 1.5));
/// ```
pub fn update_velocity(
    old_velocity: Vector2D,
    old_acceleration: Vector2D,
    new_acceleration: Vector2D,
    time_step: f64,
) -> Vector2D {
    old_velocity + (old_acceleration + new_acceleration) * (0.5 * time_step)
}

/// `p_new = p_old + v_old * dt + 0.5 * a_old * dt²`
///
/// # Examples
///
/// ```
/// use rs_nbody::models::Vector2D;
/// use rs_nbody::simulation::update_position;
///
/// let p = update_position(Vector2D::ZERO, Vector2D::new(1.0, 0.0), Vector2D::new(0.0, 2.0), 2.0);
/// assert_eq!(p, Vector2D::new(2.0, 4.0));
/// ```
pub fn update_position(
    old_position: Vector2D,
    old_velocity: Vector2D,
    old_acceleration: Vector2D,
    time_step: f64,
) -> Vector2D {
    old_position + old_velocity * time_step + old_acceleration * (0.5 * time_step * time_step)
}

/// Produces the next state of `body` from the net force acting on it now.
///
/// The input body is left untouched; the result is a new `Body` carrying
/// the new acceleration, velocity and position plus the unchanged mass,
/// radius and display attributes.
///
/// # Errors
///
/// Returns `PhysicsError::NonFiniteState` with the given `index` if the
/// new state contains a NaN or infinite component.
pub fn advance_body(body: &Body, index: usize, net_force: Vector2D, time_step: f64) -> Result<Body, PhysicsError> {
    let acceleration = update_acceleration(net_force, body.mass);
    let velocity = update_velocity(body.velocity, body.acceleration, acceleration, time_step);
    let position = update_position(body.position, body.velocity, body.acceleration, time_step);

    if !(acceleration.is_finite() && velocity.is_finite() && position.is_finite()) {
        return Err(PhysicsError::NonFiniteState { index });
    }

    Ok(Body {
        name: body.name.clone(),
        position,
        velocity,
        acceleration,
        mass: body.mass,
        radius: body.radius,
        color: body.color,
    })
}
