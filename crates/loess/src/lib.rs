//! # LOESS — Locally Weighted Scatterplot Smoothing for Rust
//!
//! A small, dependable LOESS implementation: local linear fits with a
//! tricube kernel over a bandwidth window of the data's x-range.
//!
//! ## What is LOESS?
//!
//! LOESS (locally weighted scatterplot smoothing) is a nonparametric regression
//! method that fits smooth curves through scatter plots. At each query point it
//! fits a weighted straight line using nearby data points, with weights
//! decreasing smoothly with distance. Many small local models together give a
//! flexible curve without assuming a global functional form.
//!
//! ## How a point is smoothed
//!
//! For every query position `q`:
//!
//! 1. **Neighborhood**: every observation with `|x - q| <= bandwidth * (max(x) - min(x)) / 2`.
//! 2. **Weights**: tricube `(1 - (d / d_max)^3)^3`, so the farthest neighbor gets 0
//!    and a neighbor sitting on `q` gets 1.
//! 3. **Fit**: weighted least squares line through the neighborhood.
//! 4. **Estimate**: the line evaluated at `q`.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use loess::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = vec![2.0, 4.1, 5.9, 8.2, 9.8];
//! let observations = Observation::from_arrays(&x, &y)?;
//!
//! // Build the model
//! let model = Loess::new()
//!     .bandwidth(1.0)     // Each window spans the full x-range
//!     .build()?;
//!
//! // Smooth at the observed x-positions
//! let result = model.fit(&x, &observations)?;
//!
//! println!("{}", result);
//! # Result::<(), LoessError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Observations: 5
//!   Query points: 5
//!   Bandwidth:    1
//!
//! Smoothed Data:
//!        X     Y_smooth
//! ---------------------
//!     1.00     2.000000
//!     2.00     4.014107
//!     3.00     6.043155
//!     4.00     7.999583
//!     5.00     9.800000
//! ```
//!
//! ### One-shot smoothing
//!
//! ```rust
//! use loess::prelude::*;
//!
//! let observations = vec![
//!     Observation::new(0.0, 0.0),
//!     Observation::new(1.0, 1.1),
//!     Observation::new(2.0, 1.9),
//!     Observation::new(3.0, 3.2),
//! ];
//!
//! // Query points need not coincide with observations
//! let curve = smooth(&[0.5, 1.5, 2.5], &observations, 1.0)?;
//! assert_eq!(curve.len(), 3);
//! assert_eq!(curve[1].x, 1.5);
//! # Result::<(), LoessError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Smoothing is all-or-nothing: if any query point fails (for example its
//! window contains no observations) the whole call returns that error.
//!
//! ```rust
//! use loess::prelude::*;
//!
//! let observations = vec![Observation::new(0.0, 1.0), Observation::new(4.0, 2.0)];
//!
//! match smooth(&[10.0], &observations, 0.25) {
//!     Ok(points) => println!("Smoothed: {:?}", points),
//!     Err(e) => eprintln!("Smoothing failed: {}", e),
//! }
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments (with `alloc`). Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! loess = { version = "0.1", default-features = false }
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade: one `debug`
//! record per smoothing run and one `trace` record per query point. Install
//! any logger to see them.
//!
//! ## References
//!
//! - Cleveland, W. S. (1979). "Robust Locally Weighted Regression and Smoothing Scatterplots"
//! - Cleveland, W. S., Devlin, S. J. (1988). "Locally Weighted Regression: An Approach to
//!   Regression Analysis by Local Fitting"

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - neighborhood selection and local fits.
mod algorithms;

// Layer 4: Engine - orchestration and execution control.
mod engine;

// High-level fluent API for LOESS smoothing.
mod api;

pub use crate::api::smooth;

/// The four per-query stages behind [`smooth`], for callers that need them
/// individually.
pub mod stages {
    pub use crate::api::{
        LocalFit, WeightedNeighbor, compute_weights, distance, max_distance, select_neighbors,
        to_arrays, tricube, weighted_mean,
    };
}

// Standard LOESS prelude.
pub mod prelude {
    pub use crate::api::{
        LoessBuilder as Loess, LoessError, LoessModel, LoessResult, Observation, SmoothedPoint,
        smooth,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
