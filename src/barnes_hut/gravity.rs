//! Newtonian gravity between point masses.
//!
//! These are the exact building blocks the Barnes-Hut engine falls back to
//! whenever it cannot (or may not) approximate a group of bodies.
use crate::models::{Body, Vector2D};

/// Gravitational force exerted on `b1` by `b2`.
///
/// The magnitude is `g * m1 * m2 / d²` and the force points from `b1`
/// towards `b2`. Coincident bodies (`d == 0`) exert no force on each other.
///
/// # Examples
///
/// ```
/// use rs_nbody::barnes_hut::gravitational_force;
/// use rs_nbody::models::{Body, Vector2D};
///
/// let a = Body::new("a", 2.0, 0.0, Vector2D::new(0.0, 0.0), Vector2D::ZERO).unwrap();
/// let b = Body::new("b", 3.0, 0.0, Vector2D::new(2.0, 0.0), Vector2D::ZERO).unwrap();
///
/// let force = gravitational_force(&a, &b, 1.0);
/// assert_eq!(force, Vector2D::new(1.5, 0.0));
///
/// // Newton's third law
/// assert_eq!(gravitational_force(&b, &a, 1.0), -force);
/// ```
pub fn gravitational_force(b1: &Body, b2: &Body, g: f64) -> Vector2D {
    point_mass_force(b1.position, b1.mass, b2.position, b2.mass, g)
}

fn point_mass_force(p1: Vector2D, m1: f64, p2: Vector2D, m2: f64, g: f64) -> Vector2D {
    let delta = p2 - p1;
    let d = delta.length();
    if d == 0.0 {
        return Vector2D::ZERO;
    }
    let magnitude = g * m1 * m2 / (d * d);
    delta * (magnitude / d)
}

/// Mass-weighted centroid of `bodies`.
///
/// Returns the origin for an empty slice.
///
/// # Examples
///
/// ```
/// use rs_nbody::barnes_hut::center_of_gravity;
/// use rs_nbody::models::{Body, Vector2D};
///
/// let bodies = vec![
///     Body::new("light", 1.0, 0.0, Vector2D::new(0.0, 0.0), Vector2D::ZERO).unwrap(),
///     Body::new("heavy", 3.0, 0.0, Vector2D::new(4.0, 0.0), Vector2D::ZERO).unwrap(),
/// ];
/// assert_eq!(center_of_gravity(&bodies), Vector2D::new(3.0, 0.0));
/// ```
pub fn center_of_gravity(bodies: &[Body]) -> Vector2D {
    let total_mass: f64 = bodies.iter().map(|b| b.mass).sum();
    if total_mass == 0.0 {
        return Vector2D::ZERO;
    }
    let weighted: Vector2D = bodies.iter().map(|b| b.position * b.mass).sum();
    weighted / total_mass
}

/// Exact net force on `target` from every body in `bodies`, summed pairwise.
///
/// The entry at `target_index` (the target itself) is skipped. This is the
/// O(n²) reference the tree approximation converges to as theta goes to zero.
pub fn direct_net_force(bodies: &[Body], target: &Body, target_index: Option<usize>, g: f64) -> Vector2D {
    bodies
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != target_index)
        .map(|(_, other)| gravitational_force(target, other, g))
        .sum()
}
