//! High-level API for LOESS smoothing.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: the free function
//! [`smooth`] and a fluent builder that produces a reusable [`LoessModel`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`LoessBuilder`] via `Loess::new()` (prelude name).
//! 2. Chain configuration methods (`.bandwidth()`).
//! 3. Call `.build()` and then `.fit(&query_points, &observations)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{LoessConfig, LoessExecutor, SmoothPassFn};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::output::{LoessResult, SmoothedPoint};
pub use crate::primitives::errors::LoessError;
pub use crate::primitives::observation::{Observation, WeightedNeighbor, to_arrays};

// Publicly re-exported pipeline stages
pub use crate::algorithms::neighborhood::select_neighbors;
pub use crate::algorithms::regression::{LocalFit, weighted_mean};
pub use crate::math::kernel::{compute_weights, distance, max_distance, tricube};

/// Default bandwidth, the customary two-thirds span.
pub const DEFAULT_BANDWIDTH: f64 = 0.67;

// ============================================================================
// Free Function
// ============================================================================

/// Smooth `observations` at each of `query_points`.
///
/// Returns one [`SmoothedPoint`] per query point, in the same order. Fails
/// with `InvalidBandwidth` unless `0 < bandwidth <= 1`, and aborts with the
/// first per-point error otherwise.
pub fn smooth<T: Float>(
    query_points: &[T],
    observations: &[Observation<T>],
    bandwidth: T,
) -> Result<Vec<SmoothedPoint<T>>, LoessError> {
    LoessExecutor::run(query_points, observations, bandwidth)
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring LOESS parameters.
#[derive(Debug, Clone)]
pub struct LoessBuilder<T> {
    /// Fraction of the x-range covered by each local window (0..1].
    pub bandwidth: Option<T>,

    // ======================================
    // DEV
    // ======================================
    /// Custom smooth pass function.
    #[doc(hidden)]
    pub custom_smooth_pass: Option<SmoothPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for LoessBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LoessBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bandwidth: None,
            custom_smooth_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the bandwidth (fraction of the x-range per local window).
    pub fn bandwidth(mut self, bandwidth: T) -> Self {
        if self.bandwidth.is_some() {
            self.duplicate_param = Some("bandwidth");
        }
        self.bandwidth = Some(bandwidth);
        self
    }

    // ======================================
    // DEV
    // ======================================

    /// Set a custom smooth pass function.
    #[doc(hidden)]
    pub fn custom_smooth_pass(mut self, pass: SmoothPassFn<T>) -> Self {
        self.custom_smooth_pass = Some(pass);
        self
    }

    /// Set the parallel execution hint.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Validate the configuration and build a model.
    pub fn build(self) -> Result<LoessModel<T>, LoessError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let bandwidth = match self.bandwidth {
            Some(bw) => bw,
            None => T::from(DEFAULT_BANDWIDTH).ok_or(LoessError::InvalidBandwidth(
                DEFAULT_BANDWIDTH,
            ))?,
        };
        Validator::validate_bandwidth(bandwidth)?;

        Ok(LoessModel {
            config: LoessConfig {
                bandwidth,
                custom_smooth_pass: self.custom_smooth_pass,
            },
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A configured LOESS model, reusable across data sets.
#[derive(Debug, Clone)]
pub struct LoessModel<T> {
    config: LoessConfig<T>,
}

impl<T: Float> LoessModel<T> {
    /// Bandwidth this model smooths with.
    pub fn bandwidth(&self) -> T {
        self.config.bandwidth
    }

    /// Smooth `observations` at each of `query_points`.
    pub fn fit(
        &self,
        query_points: &[T],
        observations: &[Observation<T>],
    ) -> Result<LoessResult<T>, LoessError> {
        let points = LoessExecutor::run_with_config(query_points, observations, &self.config)?;

        Ok(LoessResult {
            points,
            bandwidth_used: self.config.bandwidth,
            observations: observations.len(),
        })
    }

    /// Smooth parallel `x`/`y` arrays at each of `query_points`.
    pub fn fit_arrays(
        &self,
        query_points: &[T],
        x: &[T],
        y: &[T],
    ) -> Result<LoessResult<T>, LoessError> {
        let observations = Observation::from_arrays(x, y)?;
        self.fit(query_points, &observations)
    }
}
