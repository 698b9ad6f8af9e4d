//! Integration tests for the simulation core through the facade crate.

use tui_spring::core::Body;
use tui_spring::types::SpringParams;

const TOL: f64 = 1e-9;

#[test]
fn test_first_tick_from_documented_initial_state() {
    let params = SpringParams::default();
    let body = Body::new();

    assert_eq!(body.position, -39.0);
    assert_eq!(body.velocity, 0.0);
    assert_eq!(body.acceleration, 0.0);
    assert_eq!(body.mass, 0.1);

    let next = body.stepped(&params);
    assert!((next.acceleration - 390.0).abs() < TOL);
    assert!((next.velocity - 39.0).abs() < TOL);
    assert!((next.position - -35.1).abs() < TOL);
}

#[test]
fn test_acceleration_identity_holds_every_tick() {
    let params = SpringParams::default();
    let mut body = Body::new();

    for _ in 0..500 {
        let prev = body;
        body = body.stepped(&params);

        let expected =
            (-params.spring_constant * prev.position - prev.velocity * 0.1) / prev.mass;
        assert!((body.acceleration - expected).abs() < TOL);
    }
}

#[test]
fn test_trajectory_is_bit_identical_across_runs() {
    let params = SpringParams::default();

    let run = || {
        let mut body = Body::new();
        (0..1000)
            .map(|_| {
                body = body.stepped(&params);
                (body.position.to_bits(), body.velocity.to_bits())
            })
            .collect::<Vec<_>>()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_trajectory_stays_bounded() {
    let params = SpringParams::default();
    let mut body = Body::new();

    for _ in 0..10_000 {
        body = body.stepped(&params);
        assert!(body.position.is_finite());
        assert!(body.position.abs() <= 39.0 + TOL);
    }
}
