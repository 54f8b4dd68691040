#![cfg(feature = "dev")]
//! Tests for the tricube kernel and neighborhood weighting.
//!
//! ## Test Organization
//!
//! 1. **Scalar Helpers** - distance and tricube
//! 2. **Weights** - per-neighbor tricube weights
//! 3. **Edge Cases** - empty and zero-width neighborhoods

use approx::assert_relative_eq;

use loess::internals::math::kernel::{
    compute_weights, compute_weights_into, distance, max_distance, tricube,
};
use loess::internals::primitives::observation::{Observation, WeightedNeighbor};

fn neighbors_at(distances: &[f64]) -> Vec<WeightedNeighbor<f64>> {
    distances
        .iter()
        .map(|&d| WeightedNeighbor {
            observation: Observation::new(d, 0.0),
            distance: d,
        })
        .collect()
}

// ============================================================================
// Scalar Helper Tests
// ============================================================================

/// Distance is symmetric and never negative.
#[test]
fn test_distance_symmetric() {
    assert_relative_eq!(distance(1.5, 4.0), 2.5);
    assert_relative_eq!(distance(4.0, 1.5), 2.5);
    assert_eq!(distance(3.0, 3.0), 0.0);
}

/// Distance across and below zero.
#[test]
fn test_distance_negative() {
    assert_relative_eq!(distance(-2.0, 3.0), 5.0);
    assert_relative_eq!(distance(3.0, -2.0), 5.0);
    assert_relative_eq!(distance(-4.0, -1.5), 2.5);
    assert_relative_eq!(distance(-1.5, -4.0), 2.5);
    assert_eq!(distance(-7.25, -7.25), 0.0);
}

/// Distances from the first point of the reference data set.
#[test]
fn test_distance_reference_data() {
    let x = [
        0.5578196, 2.0217271, 2.5773252, 3.4140288, 4.3014084, 4.7448394, 5.1073781,
    ];
    let expected = [
        0.0, 1.463908, 2.019506, 2.856209, 3.743589, 4.187020, 4.549559,
    ];

    for (&xi, &e) in x.iter().zip(&expected) {
        assert_relative_eq!(distance(x[0], xi), e, epsilon = 1e-6);
    }
}

/// Tricube at the centre, inside, and outside its support.
#[test]
fn test_tricube_values() {
    assert_eq!(tricube(0.0), 1.0);
    assert_relative_eq!(tricube(0.5), 0.669921875, epsilon = 1e-12);
    assert_relative_eq!(tricube(-0.5), 0.669921875, epsilon = 1e-12);
    assert_eq!(tricube(1.0), 0.0);
    assert_eq!(tricube(2.0), 0.0);
}

// ============================================================================
// Weight Tests
// ============================================================================

/// Weights match the tricube of distances normalised by the largest one.
#[test]
fn test_weights_reference_data() {
    let neighbors = neighbors_at(&[
        0.0, 1.463908, 2.019506, 2.856209, 3.743589, 4.187020, 4.549559,
    ]);
    let expected = [
        1.0,
        0.903349061506753,
        0.7598896621661493,
        0.4262173725153165,
        0.0868617633725999,
        0.01072309994722968,
        0.0,
    ];

    let weights = compute_weights(&neighbors);

    assert_eq!(weights.len(), expected.len());
    for (&w, &e) in weights.iter().zip(&expected) {
        assert_relative_eq!(w, e, epsilon = 1e-4);
    }
}

/// Every weight lies in [0, 1]; the farthest neighbor gets zero.
#[test]
fn test_weights_bounds() {
    let neighbors = neighbors_at(&[0.3, 0.0, 2.0, 1.1, 0.7]);
    let weights = compute_weights(&neighbors);

    assert!(weights.iter().all(|&w| (0.0..=1.0).contains(&w)));
    assert_eq!(weights[2], 0.0);
    assert_eq!(weights[1], 1.0);
}

/// Weights decrease as distance grows.
#[test]
fn test_weights_monotone() {
    let neighbors = neighbors_at(&[0.0, 0.5, 1.0, 1.5, 2.0]);
    let weights = compute_weights(&neighbors);

    for pair in weights.windows(2) {
        assert!(pair[0] > pair[1]);
    }
}

/// The buffered variant replaces previous contents.
#[test]
fn test_weights_into_replaces_contents() {
    let neighbors = neighbors_at(&[0.0, 1.0]);
    let mut weights = vec![9.0, 9.0, 9.0];

    compute_weights_into(&neighbors, &mut weights);

    assert_eq!(weights, vec![1.0, 0.0]);
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// All neighbors on the query point: every weight is one.
#[test]
fn test_weights_zero_max_distance() {
    let neighbors = neighbors_at(&[0.0, 0.0, 0.0]);

    assert_eq!(max_distance(&neighbors), 0.0);
    assert_eq!(compute_weights(&neighbors), vec![1.0, 1.0, 1.0]);
}

/// An empty neighborhood gives an empty weight vector.
#[test]
fn test_weights_empty() {
    let neighbors: Vec<WeightedNeighbor<f64>> = Vec::new();

    assert_eq!(max_distance(&neighbors), 0.0);
    assert!(compute_weights(&neighbors).is_empty());
}

/// Kernel works in single precision.
#[test]
fn test_weights_f32() {
    let neighbors: Vec<WeightedNeighbor<f32>> = [0.0f32, 0.5, 1.0]
        .iter()
        .map(|&d| WeightedNeighbor {
            observation: Observation::new(d, 0.0),
            distance: d,
        })
        .collect();

    let weights = compute_weights(&neighbors);

    assert_relative_eq!(weights[1], 0.669921875f32, epsilon = 1e-6);
}
