//! # fastLoess — Parallel LOESS Smoothing for Rust
//!
//! A parallel front end for the [`loess`](https://docs.rs/loess) crate. Every
//! query point is smoothed independently, so `fastLoess` spreads the query
//! points across CPU cores with [`rayon`](https://docs.rs/rayon) while reusing
//! the exact same neighborhood, weighting and fitting code as `loess`.
//!
//! ## Key Features
//!
//! - **Parallel by default**: query points are smoothed on all available cores.
//! - **Identical results**: parallel and sequential runs produce the same values in the same order.
//! - **ndarray support**: query points and coordinates accept `ndarray` arrays (strided views included), `Vec`s, arrays or slices.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastLoess::prelude::*;
//! use ndarray::Array1;
//!
//! let x = Array1::linspace(0.0, 10.0, 101);
//! let y = x.mapv(|v: f64| 2.0 * v + 1.0);
//!
//! let model = Loess::new()
//!     .bandwidth(0.3)
//!     .parallel(true)
//!     .build()?;
//!
//! // Smooth at the observed x-positions
//! let result = model.fit_arrays(&x, &x, &y)?;
//!
//! assert_eq!(result.len(), 101);
//! assert!((result.points[50].y - 11.0).abs() < 1e-9);
//! # Result::<(), LoessError>::Ok(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cpu` (default): parallel execution with `rayon`. Without it every model
//!   runs the sequential smooth pass.
//! - `dev`: exposes internal modules for testing.

#![allow(non_snake_case)]

// Layer 4: Engine - parallel execution.
mod engine;

// High-level fluent API for LOESS smoothing.
mod api;

// Input data handling.
mod input;

pub use crate::input::Coordinates;

// Standard fastLoess prelude.
pub mod prelude {
    pub use crate::api::{
        LoessError, LoessResult, Observation, ParallelLoess,
        ParallelLoessBuilder as Loess, SmoothedPoint,
    };
    pub use crate::input::Coordinates;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
}
