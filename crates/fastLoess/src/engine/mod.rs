//! Layer 4: Engine
//!
//! This layer provides the parallel execution engine for LOESS smoothing.
//! It distributes independent query points across CPU cores.

// Parallel execution engine using CPU threads
pub mod executor;
