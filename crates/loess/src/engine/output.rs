//! Output types and result structures for LOESS operations.
//!
//! ## Purpose
//!
//! This module defines the smoothed point type and the `LoessResult` struct
//! that wraps a full smoothing run together with its metadata.
//!
//! ## Design notes
//!
//! * **Query order**: Points are stored in the caller's query order, not sorted.
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `points.len()` equals the number of query points.
//! * `points[i].x` is exactly the i-th query position.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Smoothed Point
// ============================================================================

/// A query position and its smoothed estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothedPoint<T> {
    /// Query x-position.
    pub x: T,

    /// Fitted y-estimate at `x`.
    pub y: T,
}

// ============================================================================
// Result Structure
// ============================================================================

/// LOESS output: smoothed points plus the parameters that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct LoessResult<T> {
    /// Smoothed points in query order.
    pub points: Vec<SmoothedPoint<T>>,

    /// Bandwidth used for every local fit.
    pub bandwidth_used: T,

    /// Number of observations the curve was fitted to.
    pub observations: usize,
}

impl<T: Float> LoessResult<T> {
    /// Number of smoothed points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no query points were smoothed.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Query positions, in query order.
    pub fn x(&self) -> Vec<T> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// Smoothed estimates, in query order.
    pub fn y(&self) -> Vec<T> {
        self.points.iter().map(|p| p.y).collect()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for LoessResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Observations: {}", self.observations)?;
        writeln!(f, "  Query points: {}", self.points.len())?;
        writeln!(f, "  Bandwidth:    {}", self.bandwidth_used)?;
        writeln!(f)?;

        writeln!(f, "Smoothed Data:")?;
        writeln!(f, "{:>8} {:>12}", "X", "Y_smooth")?;
        writeln!(f, "{:-<width$}", "", width = 21)?;

        // Data rows (show first 10 and last 10 if more than 20 points)
        let n = self.points.len();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            let p = &self.points[idx];
            writeln!(f, "{:>8.2} {:>12.6}", p.x, p.y)?;
        }

        Ok(())
    }
}
