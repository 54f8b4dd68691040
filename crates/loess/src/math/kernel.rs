//! Kernel (weight) functions for LOESS smoothing.
//!
//! ## Purpose
//!
//! This module turns neighbor distances into regression weights. Each
//! neighborhood is weighted with the tricube kernel, normalized by the
//! distance of its farthest member.
//!
//! ## Design notes
//!
//! * **Normalization**: Maps distances u = d / max_dist to weights K(u).
//! * **Decoupled**: The maximum distance is computed directly, so the input
//!   need not be distance-sorted.
//! * **Degenerate neighborhoods**: When every neighbor sits on the query point
//!   (`max_dist == 0`) all weights are 1 instead of evaluating 0/0.
//!
//! ## Key concepts
//!
//! * **Tricube**: K(u) = (1 - |u|^3)^3 on [-1, 1], zero outside.
//!
//! ## Invariants
//!
//! * Weights lie in [0, 1] and are aligned index-for-index with the neighbors.
//! * The farthest neighbor gets weight exactly 0 (unless `max_dist == 0`).
//! * A neighbor at distance 0 gets weight exactly 1.
//!
//! ## Non-goals
//!
//! * This module does not select neighbors or fit the local line.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::observation::WeightedNeighbor;

// ============================================================================
// Scalar Helpers
// ============================================================================

/// Absolute distance between two x-positions.
#[inline]
pub fn distance<T: Float>(a: T, b: T) -> T {
    (a - b).abs()
}

/// Tricube kernel K(u) = (1 - |u|^3)^3 for |u| < 1, zero otherwise.
#[inline]
pub fn tricube<T: Float>(u: T) -> T {
    let abs_u = u.abs();
    if abs_u >= T::one() {
        return T::zero();
    }

    let tmp = T::one() - abs_u * abs_u * abs_u;
    tmp * tmp * tmp
}

/// Largest distance in a neighborhood, or zero when it is empty.
#[inline]
pub fn max_distance<T: Float>(neighbors: &[WeightedNeighbor<T>]) -> T {
    neighbors
        .iter()
        .fold(T::zero(), |acc, n| if n.distance > acc { n.distance } else { acc })
}

// ============================================================================
// Kernel Weighter
// ============================================================================

/// Compute tricube weights for a neighborhood.
///
/// Returns one weight per neighbor, in the same order. An empty neighborhood
/// yields an empty weight vector.
pub fn compute_weights<T: Float>(neighbors: &[WeightedNeighbor<T>]) -> Vec<T> {
    let mut weights = Vec::with_capacity(neighbors.len());
    compute_weights_into(neighbors, &mut weights);
    weights
}

/// Compute tricube weights into a caller-provided vector, replacing its contents.
pub fn compute_weights_into<T: Float>(neighbors: &[WeightedNeighbor<T>], weights: &mut Vec<T>) {
    weights.clear();

    let max_dist = max_distance(neighbors);
    if max_dist <= T::zero() {
        weights.resize(neighbors.len(), T::one());
        return;
    }

    weights.extend(neighbors.iter().map(|n| tricube(n.distance / max_dist)));
}
