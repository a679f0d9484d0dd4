use crate::utils;

/// Gravitational constant in SI units (m^3 kg^-1 s^-2).
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674e-11;

/// Deepest subdivision level of the quadtree. Bodies that still share a leaf
/// at this depth are merged into a single occupant.
pub const MAX_TREE_DEPTH: usize = 64;

pub const DEFAULT_PHYSICS_CONSTANTS: utils::PhysicsConstants = utils::PhysicsConstants {
    gravitational_constant: GRAVITATIONAL_CONSTANT,
};
