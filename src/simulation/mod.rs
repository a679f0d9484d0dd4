mod integrator;
mod nbody_simulation;

pub use integrator::*;
pub use nbody_simulation::*;
