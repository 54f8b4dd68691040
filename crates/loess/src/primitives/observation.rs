//! Observation and neighbor value types.
//!
//! ## Purpose
//!
//! This module defines the plain value types that flow through the smoothing
//! pipeline: measured `(x, y)` observations and the distance-tagged neighbors
//! derived from them for a single query point.
//!
//! ## Design notes
//!
//! * **Value types**: Everything is `Copy`; no component holds shared mutable state.
//! * **Array bridging**: Helpers convert between parallel `x`/`y` arrays and observations.
//!
//! ## Invariants
//!
//! * A neighbor's distance is `|x - query_x|` and therefore non-negative.
//!
//! ## Non-goals
//!
//! * This module does not validate finiteness (handled by `validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::LoessError;

// ============================================================================
// Observation
// ============================================================================

/// A single measured data point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation<T> {
    /// Predictor value.
    pub x: T,

    /// Response value.
    pub y: T,
}

impl<T: Float> Observation<T> {
    /// Create an observation from its coordinates.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Pair up parallel `x` and `y` arrays into observations.
    pub fn from_arrays(x: &[T], y: &[T]) -> Result<Vec<Self>, LoessError> {
        if x.len() != y.len() {
            return Err(LoessError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        Ok(x.iter().zip(y).map(|(&x, &y)| Self { x, y }).collect())
    }
}

impl<T> From<(T, T)> for Observation<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

/// Split observations back into parallel `x` and `y` arrays.
pub fn to_arrays<T: Float>(observations: &[Observation<T>]) -> (Vec<T>, Vec<T>) {
    observations.iter().map(|o| (o.x, o.y)).unzip()
}

// ============================================================================
// Weighted Neighbor
// ============================================================================

/// An observation tagged with its distance to the current query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedNeighbor<T> {
    /// The selected observation.
    pub observation: Observation<T>,

    /// Absolute x-distance to the query point.
    pub distance: T,
}
