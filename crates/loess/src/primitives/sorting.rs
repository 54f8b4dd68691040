//! Sorting utilities for LOESS input data.
//!
//! ## Purpose
//!
//! This module produces an x-sorted view of the caller's observations. The
//! neighborhood search needs sorted data, but sortedness is a derived property:
//! the caller's collection is never reordered.
//!
//! ## Design notes
//!
//! * **Copy, don't mutate**: Sorting works on a local copy owned by `SortedObservations`.
//! * **Stability**: Uses stable sorting to preserve the relative order of equal x-values.
//! * **Fast path**: Already-sorted input is copied without sorting.
//!
//! ## Invariants
//!
//! * Sorted x-values are non-decreasing (for finite values).
//! * The sorted copy holds exactly the caller's observations.
//!
//! ## Non-goals
//!
//! * This module does not perform data validation or LOESS calculation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::primitives::observation::Observation;

// ============================================================================
// Data Structures
// ============================================================================

/// Observations sorted by x in ascending order.
#[derive(Debug, Clone, PartialEq)]
pub struct SortedObservations<T> {
    points: Vec<Observation<T>>,
}

impl<T: Float> SortedObservations<T> {
    /// Borrow the sorted observations.
    #[inline]
    pub fn as_slice(&self) -> &[Observation<T>] {
        &self.points
    }

    /// Number of observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if there are no observations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Width of the x-range, `max(x) - min(x)`. Zero for empty input.
    #[inline]
    pub fn total_width(&self) -> T {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => last.x - first.x,
            _ => T::zero(),
        }
    }

    /// Index of the first observation with `x >= bound`.
    #[inline]
    pub fn lower_bound(&self, bound: T) -> usize {
        self.points.partition_point(|o| o.x < bound)
    }
}

// ============================================================================
// Sorting Functions
// ============================================================================

/// Sort observations by x-coordinate into a new, owned view.
#[inline]
pub fn sort_by_x<T: Float>(observations: &[Observation<T>]) -> SortedObservations<T> {
    let mut points = observations.to_vec();

    // Fast path: check if data is already sorted by x
    let is_sorted = points.windows(2).all(|w| w[0].x <= w[1].x);
    if !is_sorted {
        points.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));
    }

    SortedObservations { points }
}
