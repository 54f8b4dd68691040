//! Neighborhood selection for local fits.
//!
//! ## Purpose
//!
//! For one query point, this module collects every observation inside the
//! bandwidth window centred on it and tags each with its distance to the
//! query. The result feeds the kernel weighter and the local fitter.
//!
//! ## Design notes
//!
//! * **Global bandwidth**: The window width is `bandwidth * (max(x) - min(x))`
//!   over the full data set, identical for every query point.
//! * **Sorted search**: On pre-sorted data the window start is found by binary
//!   search and the scan stops at the window's upper bound.
//! * **Distance order**: Neighbors are returned sorted by distance ascending
//!   (stable, so ties keep x order).
//!
//! ## Invariants
//!
//! * Every returned neighbor satisfies `lower <= x <= upper`.
//! * A successful selection is never empty.
//!
//! ## Non-goals
//!
//! * This module does not compute weights or fit anything.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::kernel::distance;
use crate::primitives::errors::LoessError;
use crate::primitives::observation::{Observation, WeightedNeighbor};
use crate::primitives::sorting::{SortedObservations, sort_by_x};
use crate::primitives::window::Window;

/// Select the neighbors of `query_x` from an unsorted observation set.
///
/// Sorts a local copy of `observations`; the caller's slice is untouched.
pub fn select_neighbors<T: Float>(
    observations: &[Observation<T>],
    query_x: T,
    bandwidth: T,
) -> Result<Vec<WeightedNeighbor<T>>, LoessError> {
    Validator::validate_bandwidth(bandwidth)?;
    if observations.is_empty() {
        return Err(LoessError::EmptyInput);
    }

    let sorted = sort_by_x(observations);
    let mut neighbors = Vec::new();
    select_neighbors_sorted(&sorted, query_x, bandwidth, &mut neighbors)?;
    Ok(neighbors)
}

/// Select the neighbors of `query_x` from already-sorted observations.
///
/// Writes into `neighbors`, replacing its contents. The bandwidth is assumed
/// to be validated by the caller.
pub fn select_neighbors_sorted<T: Float>(
    sorted: &SortedObservations<T>,
    query_x: T,
    bandwidth: T,
    neighbors: &mut Vec<WeightedNeighbor<T>>,
) -> Result<(), LoessError> {
    neighbors.clear();

    let window = Window::around(query_x, bandwidth, sorted.total_width());
    let start = sorted.lower_bound(window.lower);

    neighbors.extend(
        sorted.as_slice()[start..]
            .iter()
            .take_while(|o| window.contains(o.x))
            .map(|&observation| WeightedNeighbor {
                observation,
                distance: distance(query_x, observation.x),
            }),
    );

    if neighbors.is_empty() {
        return Err(LoessError::EmptyNeighborhood {
            query: query_x.to_f64().unwrap_or(f64::NAN),
        });
    }

    neighbors.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal));
    Ok(())
}
