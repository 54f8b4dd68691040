//! Scratch buffers for per-query neighborhood work.
//!
//! ## Purpose
//!
//! Every query point needs a neighbor list and an aligned weight vector. This
//! module holds both so a sequential pass, or each parallel worker, can reuse
//! one allocation across all of its query points.
//!
//! ## Design notes
//!
//! * **Explicit ownership**: Buffers are passed in by the caller, one per thread.
//! * **Lazy Expansion**: Vectors grow on demand and are only cleared, never shrunk.
//!
//! ## Invariants
//!
//! * After a completed weighting step, `weights.len() == neighbors.len()`.
//!
//! ## Non-goals
//!
//! * Thread-local automatic caching.
//! * Carrying any state from one query point to the next.

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::observation::WeightedNeighbor;

// ============================================================================
// Neighborhood Buffer
// ============================================================================

/// Reusable working memory for one query point at a time.
#[derive(Debug, Clone)]
pub struct NeighborhoodBuffer<T> {
    /// Distance-sorted neighbors of the current query point.
    pub neighbors: Vec<WeightedNeighbor<T>>,

    /// Kernel weights aligned with `neighbors`.
    pub weights: Vec<T>,
}

impl<T> NeighborhoodBuffer<T> {
    /// Create a buffer able to hold `capacity` neighbors without reallocating.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            neighbors: Vec::with_capacity(capacity),
            weights: Vec::with_capacity(capacity),
        }
    }

    /// Logically clear both vectors, keeping their capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.neighbors.clear();
        self.weights.clear();
    }
}

impl<T> Default for NeighborhoodBuffer<T> {
    fn default() -> Self {
        Self {
            neighbors: Vec::new(),
            weights: Vec::new(),
        }
    }
}
