//! High-level API for LOESS smoothing with parallel execution support.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point for LOESS with parallel
//! execution. It wraps the `loess` builder and, when parallel execution is
//! enabled, plugs the `rayon` smooth pass into the core executor.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `loess` builder pattern.
//! * **Parallel-First**: Defaults to parallel execution.
//! * **Flexible Input**: Query points and coordinates accept slices, vectors, or ndarray arrays.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ParallelLoessBuilder`] via `Loess::new()` (prelude name).
//! 2. Chain configuration methods (`.bandwidth()`, `.parallel()`).
//! 3. Call `.build()` and then `.fit(&query_points, &observations)`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::smooth_pass_parallel;
use crate::input::Coordinates;

// Publicly re-exported types
pub use loess::internals::api::{
    LoessBuilder, LoessError, LoessModel, LoessResult, Observation, SmoothedPoint,
};

// ============================================================================
// Parallel Builder
// ============================================================================

/// Builder for a LOESS model with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelLoessBuilder<T: Float> {
    /// Base builder from the loess crate
    pub base: LoessBuilder<T>,
}

impl<T: Float + Send + Sync> Default for ParallelLoessBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + Send + Sync> ParallelLoessBuilder<T> {
    /// Create a new builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from the loess `LoessBuilder`
    /// * parallel: true
    pub fn new() -> Self {
        Self {
            base: LoessBuilder::new(),
        }
    }

    /// Set the bandwidth (fraction of the x-range per local window).
    pub fn bandwidth(mut self, bandwidth: T) -> Self {
        self.base = self.base.bandwidth(bandwidth);
        self
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    /// Validate the configuration and build a model.
    pub fn build(self) -> Result<ParallelLoess<T>, LoessError> {
        let parallel = self.base.parallel.unwrap_or(true) && cfg!(feature = "cpu");

        let mut base = self.base;
        if parallel {
            base = base.custom_smooth_pass(smooth_pass_parallel::<T>);
        }

        Ok(ParallelLoess {
            model: base.build()?,
            parallel,
        })
    }
}

// ============================================================================
// Parallel Model
// ============================================================================

/// A configured LOESS model that smooths query points in parallel.
#[derive(Debug, Clone)]
pub struct ParallelLoess<T> {
    model: LoessModel<T>,
    parallel: bool,
}

impl<T: Float + Send + Sync> ParallelLoess<T> {
    /// Bandwidth this model smooths with.
    pub fn bandwidth(&self) -> T {
        self.model.bandwidth()
    }

    /// Whether query points are smoothed in parallel.
    ///
    /// Always `false` when built without the `cpu` feature.
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Smooth `observations` at each of `query_points`.
    pub fn fit<Q>(
        &self,
        query_points: &Q,
        observations: &[Observation<T>],
    ) -> Result<LoessResult<T>, LoessError>
    where
        Q: Coordinates<T> + ?Sized,
    {
        self.model.fit(&query_points.values(), observations)
    }

    /// Smooth parallel `x`/`y` coordinate arrays at each of `query_points`.
    pub fn fit_arrays<Q, X, Y>(
        &self,
        query_points: &Q,
        x: &X,
        y: &Y,
    ) -> Result<LoessResult<T>, LoessError>
    where
        Q: Coordinates<T> + ?Sized,
        X: Coordinates<T> + ?Sized,
        Y: Coordinates<T> + ?Sized,
    {
        let observations = x.pair_with(y)?;
        self.fit(query_points, &observations)
    }
}
