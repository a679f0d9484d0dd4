mod gravity;
mod quad_tree;
mod force_approximation;

pub use gravity::*;
pub use quad_tree::*;

#[cfg(test)]
mod force_approximation_tests;
