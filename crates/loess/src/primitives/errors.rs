//! Error types for LOESS operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while smoothing:
//! parameter validation, input validation, and degenerate neighborhoods that
//! make a local fit impossible.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (bandwidth, lengths, query x).
//! * **All-or-nothing**: A single failing query point aborts the whole `smooth` call.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Parameter validation**: Bandwidth outside `(0, 1]`, duplicated builder settings.
//! 2. **Input validation**: Empty observation sets, mismatched arrays, non-finite values.
//! 3. **Neighborhood failures**: Empty windows and neighborhoods whose weights sum to zero.
//!
//! ## Invariants
//!
//! * Numeric payloads are stored as `f64` regardless of the working float type.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for LOESS operations.
#[derive(Debug, Clone, PartialEq)]
pub enum LoessError {
    /// The observation set is empty; at least one observation is required.
    EmptyInput,

    /// `x` and `y` arrays must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` array.
        x_len: usize,
        /// Number of elements in the `y` array.
        y_len: usize,
    },

    /// Weights and neighbors must be aligned one to one.
    LengthMismatch {
        /// Number of neighbors (or values).
        neighbors: usize,
        /// Number of weights.
        weights: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Bandwidth must be in the range (0, 1].
    InvalidBandwidth(f64),

    /// The bandwidth window around a query point contains no observations.
    EmptyNeighborhood {
        /// The query x-position.
        query: f64,
    },

    /// The weights of a neighborhood sum to zero, so no weighted mean exists.
    DegenerateWeights,

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for LoessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input observations are empty"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::LengthMismatch { neighbors, weights } => {
                write!(
                    f,
                    "Length mismatch: {neighbors} neighbors but {weights} weights"
                )
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidBandwidth(bw) => {
                write!(f, "Invalid bandwidth: {bw} (must be > 0 and <= 1)")
            }
            Self::EmptyNeighborhood { query } => {
                write!(f, "No observations inside the window around x = {query}")
            }
            Self::DegenerateWeights => {
                write!(f, "Degenerate weights: neighborhood weights sum to zero")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for LoessError {}
