//! Browser tests, run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use boid_wasm::{BoidSimulation, SNAPSHOT_STRIDE};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn snapshot_has_four_floats_per_boid() {
    let mut sim = BoidSimulation::new(300.0, 200.0, 25, Some(1)).unwrap();
    sim.tick(16.0);

    let snapshot = sim.snapshot().to_vec();
    assert_eq!(snapshot.len(), 25 * SNAPSHOT_STRIDE);
    for row in snapshot.chunks(SNAPSHOT_STRIDE) {
        assert!(row[0] >= 0.0 && row[0] < 300.0);
        assert!(row[1] >= 0.0 && row[1] < 200.0);
    }
}

#[wasm_bindgen_test]
fn rejects_invalid_sizes() {
    assert!(BoidSimulation::new(0.0, 200.0, 5, None).is_err());

    let mut sim = BoidSimulation::new(300.0, 200.0, 5, None).unwrap();
    assert!(sim.resize(300.0, -1.0).is_err());
    assert!(sim.resize(640.0, 480.0).is_ok());
}

#[wasm_bindgen_test]
fn invalid_weights_are_rejected() {
    let mut sim = BoidSimulation::new(300.0, 200.0, 5, Some(2)).unwrap();
    assert!(sim.set_cohesion_weight(-1.0).is_err());
    assert!(sim.set_speed_range(2.0, 1.0).is_err());
    assert!(sim.set_alignment_weight(0.1).is_ok());
}

#[wasm_bindgen_test]
fn forced_cluster_is_reported() {
    let mut sim = BoidSimulation::new(300.0, 200.0, 5, Some(2)).unwrap();
    assert!(!sim.cluster_active());
    sim.trigger_cluster(0.0);
    sim.tick(10.0);
    assert!(sim.cluster_active());
}

#[wasm_bindgen_test]
fn connection_pairs_are_index_pairs() {
    let mut sim = BoidSimulation::new(300.0, 200.0, 40, Some(4)).unwrap();
    sim.tick(16.0);

    let pairs = sim.connection_pairs(80.0).to_vec();
    assert_eq!(pairs.len() % 2, 0);
    for pair in pairs.chunks(2) {
        assert!(pair[0] < pair[1]);
        assert!((pair[1] as usize) < sim.boid_count());
    }
}
