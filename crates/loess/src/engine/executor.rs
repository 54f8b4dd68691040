//! Execution engine for LOESS smoothing operations.
//!
//! ## Purpose
//!
//! This module orchestrates a smoothing run. It validates inputs, sorts the
//! observations once, and then runs the per-query pipeline
//! (select neighbors, weight, fit, evaluate) for every query point.
//!
//! ## Design notes
//!
//! * Provides both configuration-based and parameter-based entry points.
//! * The smooth pass is a pure map over query points; the first failing
//!   point aborts the run and no partial output is returned.
//! * A pluggable smooth pass lets extension crates swap in a parallel pass.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * Output length and order match the query points exactly.
//! * The caller's observations are never reordered.
//! * No state is carried from one query point to the next.
//!
//! ## Non-goals
//!
//! * This module does not provide public-facing result formatting.
//! * This module does not handle parallel execution directly (handled by fastLoess).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::{debug, trace};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::neighborhood::select_neighbors_sorted;
use crate::algorithms::regression::LocalFit;
use crate::engine::output::SmoothedPoint;
use crate::engine::validator::Validator;
use crate::math::kernel::compute_weights_into;
pub use crate::primitives::buffer::NeighborhoodBuffer;
use crate::primitives::errors::LoessError;
use crate::primitives::observation::Observation;
use crate::primitives::sorting::{SortedObservations, sort_by_x};

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for custom smooth pass function
#[doc(hidden)]
pub type SmoothPassFn<T> = fn(
    &[T],                   // query points
    &SortedObservations<T>, // observations sorted by x
    T,                      // bandwidth (validated)
) -> Result<Vec<SmoothedPoint<T>>, LoessError>;

/// Configuration for a LOESS run.
#[derive(Debug, Clone, Copy)]
pub struct LoessConfig<T> {
    /// Fraction of the x-range covered by each local window.
    pub bandwidth: T,

    /// Custom smooth pass (e.g. parallel).
    #[doc(hidden)]
    pub custom_smooth_pass: Option<SmoothPassFn<T>>,
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for LOESS smoothing.
pub struct LoessExecutor;

impl LoessExecutor {
    // ========================================================================
    // Entry Points
    // ========================================================================

    /// Smooth `query_points` against `observations` with the given bandwidth.
    pub fn run<T: Float>(
        query_points: &[T],
        observations: &[Observation<T>],
        bandwidth: T,
    ) -> Result<Vec<SmoothedPoint<T>>, LoessError> {
        Self::run_with_config(
            query_points,
            observations,
            &LoessConfig {
                bandwidth,
                custom_smooth_pass: None,
            },
        )
    }

    /// Smooth using a full configuration.
    pub fn run_with_config<T: Float>(
        query_points: &[T],
        observations: &[Observation<T>],
        config: &LoessConfig<T>,
    ) -> Result<Vec<SmoothedPoint<T>>, LoessError> {
        // Bandwidth first: fail before any per-point work
        Validator::validate_bandwidth(config.bandwidth)?;
        Validator::validate_observations(observations)?;
        Validator::validate_query_points(query_points)?;

        let sorted = sort_by_x(observations);

        debug!(
            "loess: smoothing {} query points against {} observations (bandwidth={}, custom_pass={})",
            query_points.len(),
            sorted.len(),
            config.bandwidth.to_f64().unwrap_or(f64::NAN),
            config.custom_smooth_pass.is_some()
        );

        match config.custom_smooth_pass {
            Some(pass) => pass(query_points, &sorted, config.bandwidth),
            None => Self::smooth_pass(query_points, &sorted, config.bandwidth),
        }
    }

    // ========================================================================
    // Passes
    // ========================================================================

    /// Sequential smooth pass over all query points.
    pub fn smooth_pass<T: Float>(
        query_points: &[T],
        sorted: &SortedObservations<T>,
        bandwidth: T,
    ) -> Result<Vec<SmoothedPoint<T>>, LoessError> {
        let mut buffer = NeighborhoodBuffer::with_capacity(sorted.len());

        query_points
            .iter()
            .map(|&query_x| Self::smooth_point(sorted, query_x, bandwidth, &mut buffer))
            .collect()
    }

    /// Run the full pipeline for a single query point.
    pub fn smooth_point<T: Float>(
        sorted: &SortedObservations<T>,
        query_x: T,
        bandwidth: T,
        buffer: &mut NeighborhoodBuffer<T>,
    ) -> Result<SmoothedPoint<T>, LoessError> {
        buffer.clear();

        select_neighbors_sorted(sorted, query_x, bandwidth, &mut buffer.neighbors)?;
        compute_weights_into(&buffer.neighbors, &mut buffer.weights);
        let fit = LocalFit::fit(&buffer.neighbors, &buffer.weights)?;

        trace!(
            "loess: x={} neighbors={} slope={} intercept={}",
            query_x.to_f64().unwrap_or(f64::NAN),
            buffer.neighbors.len(),
            fit.slope.to_f64().unwrap_or(f64::NAN),
            fit.intercept.to_f64().unwrap_or(f64::NAN)
        );

        Ok(SmoothedPoint {
            x: query_x,
            y: fit.predict(query_x),
        })
    }
}
