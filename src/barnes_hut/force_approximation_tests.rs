use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::assert_float_eq;
use crate::barnes_hut::{center_of_gravity, direct_net_force, gravitational_force, QuadTree};
use crate::models::{Body, Universe, Vector2D};

fn body_at(x: f64, y: f64, mass: f64) -> Body {
    Body::new("test", mass, 0.0, Vector2D::new(x, y), Vector2D::ZERO).unwrap()
}

fn random_universe(seed: u64, count: usize, width: f64) -> Universe {
    let mut rng = StdRng::seed_from_u64(seed);
    let bodies = (0..count)
        .map(|_| {
            body_at(
                rng.gen_range(0.0..width),
                rng.gen_range(0.0..width),
                rng.gen_range(1.0..10.0),
            )
        })
        .collect();
    Universe::new(width, bodies).unwrap()
}

#[test]
fn test_gravitational_force_inverse_square() {
    let a = body_at(0.0, 0.0, 1.0);
    let near = body_at(1.0, 0.0, 1.0);
    let far = body_at(2.0, 0.0, 1.0);
    let f_near = gravitational_force(&a, &near, 1.0);
    let f_far = gravitational_force(&a, &far, 1.0);
    assert_float_eq(f_near.x / f_far.x, 4.0, 1e-12, None);
    assert_eq!(f_near.y, 0.0);
}

#[test]
fn test_gravitational_force_direction() {
    let a = body_at(1.0, 1.0, 2.0);
    let b = body_at(4.0, 5.0, 5.0);
    let force = gravitational_force(&a, &b, 1.0);
    // |d| = 5, magnitude = 10 / 25, direction (3, 4) / 5
    assert_relative_eq!(force, Vector2D::new(0.4 * 0.6, 0.4 * 0.8), epsilon = 1e-12);
}

#[test]
fn test_gravitational_force_zero_distance() {
    let a = body_at(3.0, 3.0, 1.0);
    let b = body_at(3.0, 3.0, 1.0);
    assert_eq!(gravitational_force(&a, &b, 1.0), Vector2D::ZERO);
}

#[test]
fn test_center_of_gravity_empty() {
    assert_eq!(center_of_gravity(&[]), Vector2D::ZERO);
}

#[test]
fn test_direct_net_force_skips_target() {
    let bodies = vec![body_at(0.0, 0.0, 1.0), body_at(2.0, 0.0, 4.0)];
    let force = direct_net_force(&bodies, &bodies[0], Some(0), 1.0);
    assert_relative_eq!(force, Vector2D::new(1.0, 0.0), epsilon = 1e-12);
}

#[test]
fn test_single_body_feels_no_force() {
    let universe = Universe::new(100.0, vec![body_at(40.0, 60.0, 5.0)]).unwrap();
    let tree = QuadTree::build(&universe).unwrap();
    for theta in [0.0, 0.5, 1.0, 10.0] {
        assert_eq!(tree.net_force(&universe.bodies[0], Some(0), theta, 1.0), Vector2D::ZERO);
    }
}

#[test]
fn test_empty_tree_exerts_no_force() {
    let universe = Universe::new(100.0, Vec::new()).unwrap();
    let tree = QuadTree::build(&universe).unwrap();
    let probe = body_at(50.0, 50.0, 1.0);
    assert_eq!(tree.net_force(&probe, None, 0.5, 1.0), Vector2D::ZERO);
}

#[test]
fn test_theta_zero_matches_direct_summation() {
    let universe = random_universe(42, 100, 100.0);
    let tree = QuadTree::build(&universe).unwrap();
    for (index, body) in universe.bodies.iter().enumerate() {
        let approximated = tree.net_force(body, Some(index), 0.0, 1.0);
        let exact = direct_net_force(&universe.bodies, body, Some(index), 1.0);
        assert_relative_eq!(approximated, exact, epsilon = 1e-9, max_relative = 1e-9);
    }
}

#[test]
fn test_pair_matches_direct_force_for_any_theta() {
    let universe = Universe::new(100.0, vec![body_at(10.0, 20.0, 3.0), body_at(70.0, 80.0, 7.0)]).unwrap();
    let tree = QuadTree::build(&universe).unwrap();
    let exact = gravitational_force(&universe.bodies[0], &universe.bodies[1], 1.0);
    for theta in [0.0, 0.5, 2.0] {
        assert_relative_eq!(tree.net_force(&universe.bodies[0], Some(0), theta, 1.0), exact, epsilon = 1e-15);
    }
}

#[test]
fn test_theta_approximation_stays_close() {
    let universe = random_universe(3, 300, 1000.0);
    let tree = QuadTree::build(&universe).unwrap();
    // A probe far outside the mass distribution only sees the root aggregate.
    let probe = body_at(500.0, 10_000.0, 1.0);
    let approximated = tree.net_force(&probe, None, 0.5, 1.0);
    let exact = direct_net_force(&universe.bodies, &probe, None, 1.0);
    let error = (approximated - exact).length() / exact.length();
    assert!(error < 1e-2, "relative error {} too large", error);
}

#[test]
fn test_large_theta_uses_root_aggregate() {
    let universe = Universe::new(
        100.0,
        vec![body_at(10.0, 10.0, 1.0), body_at(20.0, 15.0, 2.0), body_at(15.0, 30.0, 3.0)],
    )
    .unwrap();
    let tree = QuadTree::build(&universe).unwrap();
    let probe = body_at(90.0, 90.0, 1.0);

    let approximated = tree.net_force(&probe, None, 1e9, 1.0);
    let root = Body::aggregate(tree.total_mass(), tree.center_of_mass().unwrap());
    assert_eq!(approximated, gravitational_force(&probe, &root, 1.0));
}

#[test]
fn test_target_on_aggregate_centroid_is_finite() {
    // The middle body sits exactly on the root's centre of mass.
    let universe = Universe::new(
        10.0,
        vec![body_at(2.0, 5.0, 1.0), body_at(8.0, 5.0, 1.0), body_at(5.0, 5.0, 1.0)],
    )
    .unwrap();
    let tree = QuadTree::build(&universe).unwrap();
    assert_eq!(tree.center_of_mass(), Some(Vector2D::new(5.0, 5.0)));

    for theta in [0.0, 0.5, 1.0, 1e9] {
        let force = tree.net_force(&universe.bodies[2], Some(2), theta, 1.0);
        assert!(force.is_finite());
        assert!(force.length() < 1e-12, "theta {}: {:?}", theta, force);
    }
}

#[test]
fn test_large_theta_excludes_target_mass() {
    let universe = Universe::new(10.0, vec![body_at(0.0, 0.0, 1.0), body_at(10.0, 10.0, 1.0)]).unwrap();
    let tree = QuadTree::build(&universe).unwrap();
    for theta in [1.0, 2.0, 1e9] {
        for (index, body) in universe.bodies.iter().enumerate() {
            let approximated = tree.net_force(body, Some(index), theta, 1.0);
            let exact = direct_net_force(&universe.bodies, body, Some(index), 1.0);
            assert_relative_eq!(approximated, exact, epsilon = 1e-15);
        }
    }
}

#[test]
fn test_large_theta_approximates_only_foreign_subtrees() {
    let universe = Universe::new(
        10.0,
        vec![body_at(1.0, 1.0, 1.0), body_at(8.0, 8.0, 1.0), body_at(9.0, 9.0, 1.0)],
    )
    .unwrap();
    let tree = QuadTree::build(&universe).unwrap();

    // The pair in the north-east quadrant is far enough away to act as one
    // point mass, while the root holding the target is always opened.
    let force = tree.net_force(&universe.bodies[0], Some(0), 2.0, 1.0);
    let pair = Body::aggregate(2.0, Vector2D::new(8.5, 8.5));
    assert_relative_eq!(force, gravitational_force(&universe.bodies[0], &pair, 1.0), epsilon = 1e-12);
}

#[test]
fn test_coincident_bodies_ignore_each_other() {
    let universe = Universe::new(
        10.0,
        vec![body_at(3.0, 3.0, 1.0), body_at(3.0, 3.0, 2.0), body_at(9.0, 3.0, 4.0)],
    )
    .unwrap();
    let tree = QuadTree::build(&universe).unwrap();

    let on_first = tree.net_force(&universe.bodies[0], Some(0), 0.5, 1.0);
    let expected = gravitational_force(&universe.bodies[0], &universe.bodies[2], 1.0);
    assert!(on_first.is_finite());
    assert_relative_eq!(on_first, expected, epsilon = 1e-12);

    let on_far = tree.net_force(&universe.bodies[2], Some(2), 0.0, 1.0);
    let exact = direct_net_force(&universe.bodies, &universe.bodies[2], Some(2), 1.0);
    assert_relative_eq!(on_far, exact, epsilon = 1e-12);
}

#[test]
fn test_internal_forces_cancel() {
    let universe = random_universe(5, 60, 100.0);
    let tree = QuadTree::build(&universe).unwrap();
    let total: Vector2D = universe
        .bodies
        .iter()
        .enumerate()
        .map(|(index, body)| tree.net_force(body, Some(index), 0.0, 1.0))
        .sum();
    assert!(total.length() < 1e-6, "Net internal force should vanish, got {:?}", total);
}
