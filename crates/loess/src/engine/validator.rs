//! Input validation for LOESS configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions for LOESS configuration
//! parameters and input data: the bandwidth range, non-empty observation
//! sets, finite values, and aligned sequences.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::LoessError;
use crate::primitives::observation::Observation;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for LOESS configuration and input data.
///
/// All methods return `Result<(), LoessError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the bandwidth: finite and in (0, 1].
    pub fn validate_bandwidth<T: Float>(bandwidth: T) -> Result<(), LoessError> {
        if !bandwidth.is_finite() || bandwidth <= T::zero() || bandwidth > T::one() {
            return Err(LoessError::InvalidBandwidth(
                bandwidth.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no builder parameter was set more than once.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), LoessError> {
        if let Some(param) = duplicate_param {
            return Err(LoessError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }

    // ========================================================================
    // Input Validation
    // ========================================================================

    /// Validate the observation set: non-empty and finite.
    pub fn validate_observations<T: Float>(
        observations: &[Observation<T>],
    ) -> Result<(), LoessError> {
        if observations.is_empty() {
            return Err(LoessError::EmptyInput);
        }

        for (i, o) in observations.iter().enumerate() {
            if !o.x.is_finite() {
                return Err(LoessError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    o.x.to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !o.y.is_finite() {
                return Err(LoessError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    o.y.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate query positions for finiteness. An empty query set is allowed.
    pub fn validate_query_points<T: Float>(query_points: &[T]) -> Result<(), LoessError> {
        for (i, &q) in query_points.iter().enumerate() {
            if !q.is_finite() {
                return Err(LoessError::InvalidNumericValue(format!(
                    "query[{}]={}",
                    i,
                    q.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate that two parallel sequences have the same length.
    pub fn validate_aligned(neighbors: usize, weights: usize) -> Result<(), LoessError> {
        if neighbors != weights {
            return Err(LoessError::LengthMismatch { neighbors, weights });
        }
        Ok(())
    }
}
