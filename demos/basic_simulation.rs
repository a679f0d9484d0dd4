// demos/basic_simulation.rs

use std::error::Error;

use log::info;
use rs_nbody::barnes_hut::QuadTree;
use rs_nbody::models::{Body, Rgb, Universe, Vector2D};
use rs_nbody::simulation::BarnesHutSimulation;
use rs_nbody::utils::PhysicsConstants;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // Natural units: G = 1, a heavy star in the middle of a 1000 x 1000 box.
    let constants = PhysicsConstants::new(Some(1.0));
    let centre = Vector2D::new(500.0, 500.0);
    let star_mass = 1.0e6;

    let mut bodies = vec![Body::new("Star", star_mass, 10.0, centre, Vector2D::ZERO)?
        .with_color(Rgb { red: 255, green: 220, blue: 120 })];

    // Planets on roughly circular orbits, alternating direction of travel.
    for (i, radius) in [80.0, 140.0, 210.0, 300.0].iter().enumerate() {
        let speed = (constants.gravitational_constant * star_mass / radius).sqrt();
        let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
        let position = centre + Vector2D::new(sign * radius, 0.0);
        let velocity = Vector2D::new(0.0, sign * speed);
        bodies.push(Body::new(format!("Planet {}", i + 1), 10.0, 2.0, position, velocity)?);
    }

    let universe = Universe::new(1000.0, bodies)?;

    let tree = QuadTree::build(&universe)?;
    println!("Initial tree: {} nodes, depth {}", tree.node_count(), tree.depth());

    let simulation = BarnesHutSimulation::new(constants, 0.01, 0.5)?;
    let history = simulation.simulate(&universe, 1000)?;
    info!("Recorded {} snapshots", history.len());

    let first = &history[0];
    let last = &history[history.len() - 1];

    println!("Initial state:");
    for body in &first.bodies {
        println!("  {}: position={:?}, velocity={:?}", body.name, body.position, body.velocity);
    }
    println!("\nFinal state:");
    for body in &last.bodies {
        println!("  {}: position={:?}, velocity={:?}", body.name, body.position, body.velocity);
    }

    println!("\nTotal momentum: {:?} -> {:?}", first.total_momentum(), last.total_momentum());
    println!("Kinetic energy: {} -> {}", first.kinetic_energy(), last.kinetic_energy());
    println!("Centre of mass: {:?} -> {:?}", first.center_of_mass(), last.center_of_mass());

    Ok(())
}
