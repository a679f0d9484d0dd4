//! Drives a Barnes-Hut N-body simulation over a number of generations.
//!
//! Every generation builds a fresh quadtree from the previous snapshot,
//! advances all bodies against that same frozen tree, and appends the new
//! snapshot to the history. Snapshots are never modified once produced.
//!
//! # Example
//!
//! ```
//! use rs_nbody::models::{Body, Universe, Vector2D};
//! use rs_nbody::simulation::BarnesHutSimulation;
//! use rs_nbody::utils::PhysicsConstants;
//!
//! let bodies = vec![
//!     Body::new("a", 1.0e3, 1.0, Vector2D::new(40.0, 50.0), Vector2D::new(0.0, 0.5)).unwrap(),
//!     Body::new("b", 1.0e3, 1.0, Vector2D::new(60.0, 50.0), Vector2D::new(0.0, -0.5)).unwrap(),
//! ];
//! let universe = Universe::new(100.0, bodies).unwrap();
//!
//! let simulation = BarnesHutSimulation::new(PhysicsConstants::new(Some(1.0)), 0.01, 0.5)
//!     .expect("valid parameters");
//! let history = simulation.simulate(&universe, 100).expect("simulation failed");
//!
//! assert_eq!(history.len(), 101);
//! assert_eq!(history[0], universe);
//! ```
use log::{debug, error};

use crate::barnes_hut::{direct_net_force, QuadTree};
use crate::models::{Body, Universe, Vector2D};
use crate::simulation::advance_body;
use crate::utils::{validate_theta, validate_time_step, PhysicsConstants, PhysicsError};

/// A configured Barnes-Hut run: constants, time step and opening angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarnesHutSimulation {
    pub constants: PhysicsConstants,
    pub time_step: f64,
    pub theta: f64,
}

impl BarnesHutSimulation {
    /// Creates a simulation after validating its parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the gravitational constant or `time_step` is not
    /// strictly positive, or `theta` is negative or not finite.
    pub fn new(constants: PhysicsConstants, time_step: f64, theta: f64) -> Result<Self, PhysicsError> {
        constants.validate()?;
        validate_time_step(time_step)?;
        validate_theta(theta)?;
        Ok(BarnesHutSimulation { constants, time_step, theta })
    }

    /// Advances `universe` by one time step and returns the new snapshot.
    pub fn step(&self, universe: &Universe) -> Result<Universe, PhysicsError> {
        universe.validate()?;
        self.advance(universe)
    }

    /// Runs `num_generations` steps starting from `initial`.
    ///
    /// The result has `num_generations + 1` snapshots; the first is a copy of
    /// `initial`.
    pub fn simulate(&self, initial: &Universe, num_generations: usize) -> Result<Vec<Universe>, PhysicsError> {
        initial.validate()?;
        run_generations(initial, num_generations, |universe| self.advance(universe))
    }

    fn advance(&self, universe: &Universe) -> Result<Universe, PhysicsError> {
        let tree = QuadTree::build(universe)?;
        let g = self.constants.gravitational_constant;
        advance_universe(universe, self.time_step, |index, body| {
            tree.net_force(body, Some(index), self.theta, g)
        })
    }
}

/// Simulates `initial` for `num_generations` steps using the Barnes-Hut
/// approximation with opening angle `theta`.
///
/// # Errors
///
/// Fails before doing any work if a parameter or the initial universe is
/// invalid, and during the run if a body leaves the universe or reaches a
/// non-finite state.
pub fn simulate(
    initial: &Universe,
    num_generations: usize,
    time_step: f64,
    theta: f64,
    constants: PhysicsConstants,
) -> Result<Vec<Universe>, PhysicsError> {
    BarnesHutSimulation::new(constants, time_step, theta)?.simulate(initial, num_generations)
}

/// Simulates `initial` with exact pairwise force summation.
///
/// Each generation costs O(n²); this serves as the reference the tree
/// approximation is measured against.
pub fn simulate_gravity(
    initial: &Universe,
    num_generations: usize,
    time_step: f64,
    constants: PhysicsConstants,
) -> Result<Vec<Universe>, PhysicsError> {
    constants.validate()?;
    validate_time_step(time_step)?;
    initial.validate()?;

    let g = constants.gravitational_constant;
    run_generations(initial, num_generations, |universe| {
        advance_universe(universe, time_step, |index, body| {
            direct_net_force(&universe.bodies, body, Some(index), g)
        })
    })
}

fn run_generations<F>(initial: &Universe, num_generations: usize, mut step: F) -> Result<Vec<Universe>, PhysicsError>
where
    F: FnMut(&Universe) -> Result<Universe, PhysicsError>,
{
    let mut history = Vec::with_capacity(num_generations + 1);
    history.push(initial.clone());

    for generation in 1..=num_generations {
        let next = step(&history[generation - 1]).map_err(|e| {
            error!("Generation {} of {} failed: {}", generation, num_generations, e);
            e
        })?;
        debug!("Generation {} of {} complete", generation, num_generations);
        history.push(next);
    }

    Ok(history)
}

/// Builds the next snapshot; `net_force` must only read the current one.
fn advance_universe<F>(current: &Universe, time_step: f64, net_force: F) -> Result<Universe, PhysicsError>
where
    F: Fn(usize, &Body) -> Vector2D,
{
    let bodies = current
        .bodies
        .iter()
        .enumerate()
        .map(|(index, body)| advance_body(body, index, net_force(index, body), time_step))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Universe { width: current.width, bodies })
}
