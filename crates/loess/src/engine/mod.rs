//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the smoothing process by coordinating between
//! primitives (types, sorting, buffers) and algorithms (neighborhood
//! selection, weighting, local fits). It provides the per-query pipeline and
//! the pass over all query points.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Unified execution engine for LOESS smoothing.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for LOESS operations.
pub mod output;
