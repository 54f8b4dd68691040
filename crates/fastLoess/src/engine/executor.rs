//! Parallel execution engine for LOESS smoothing operations.
//!
//! ## Purpose
//!
//! This module provides the parallel smooth pass that is injected into the
//! `loess` crate's execution engine. Query points are independent, so their
//! local fits are distributed across CPU cores.
//!
//! ## Design notes
//!
//! * **Implementation**: Provides a drop-in replacement for the sequential smooth pass.
//! * **Parallelism**: Uses `rayon` for data-parallel execution across CPU cores.
//! * **Optimization**: Reuses one neighborhood buffer per worker to minimize allocations.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Output order matches the query order exactly.
//! * The sorted observations are shared read-only between workers.
//! * Any failing query point fails the whole pass.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not sort input data (handled by the `loess` executor).

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use log::debug;
use num_traits::Float;

// Export dependencies from loess crate
use loess::internals::engine::executor::{LoessExecutor, NeighborhoodBuffer};
use loess::internals::engine::output::SmoothedPoint;
use loess::internals::primitives::errors::LoessError;
use loess::internals::primitives::sorting::SortedObservations;

// ============================================================================
// Parallel Smoothing Function
// ============================================================================

/// Perform a single smoothing pass over all query points in parallel.
#[cfg(feature = "cpu")]
pub fn smooth_pass_parallel<T>(
    query_points: &[T],
    sorted: &SortedObservations<T>,
    bandwidth: T,
) -> Result<Vec<SmoothedPoint<T>>, LoessError>
where
    T: Float + Send + Sync,
{
    debug!(
        "fastLoess: parallel smooth pass over {} query points on {} threads",
        query_points.len(),
        rayon::current_num_threads()
    );

    let n = sorted.len();

    query_points
        .par_iter()
        .map_init(
            || NeighborhoodBuffer::with_capacity(n),
            |buffer, &query_x| LoessExecutor::smooth_point(sorted, query_x, bandwidth, buffer),
        )
        .collect()
}

/// Sequential fallback used when the `cpu` feature is disabled.
#[cfg(not(feature = "cpu"))]
pub fn smooth_pass_parallel<T>(
    query_points: &[T],
    sorted: &SortedObservations<T>,
    bandwidth: T,
) -> Result<Vec<SmoothedPoint<T>>, LoessError>
where
    T: Float + Send + Sync,
{
    debug!("fastLoess: built without `cpu`, running the sequential smooth pass");
    LoessExecutor::smooth_pass(query_points, sorted, bandwidth)
}
