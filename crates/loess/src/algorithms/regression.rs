//! Regression Logic
//!
//! ## Purpose
//!
//! This module provides the weighted least squares fit used at every query
//! point: a straight line through a weighted neighborhood, reduced to closed
//! form for a single predictor.
//!
//! ## Design notes
//!
//! * **Centred form**: Slope is `sum w (x - x̄)(y - ȳ) / sum w (x - x̄)^2` with
//!   weighted means x̄ and ȳ; no matrix inversion.
//! * **Flat-line fallback**: When every positively weighted x is the same
//!   value (or the centred denominator is not positive) the fit is
//!   `slope = 0` and `intercept = ȳ` rather than NaN or infinity. The check
//!   is exact, so large x offsets (timestamps, years) keep their slope.
//! * **Centred evaluation**: `predict` evaluates `ȳ + slope (x - x̄)`, which
//!   avoids cancelling `slope * x` against a large intercept.
//! * **Errors**: Misaligned inputs and zero total weight are reported, not masked.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::LoessError;
use crate::primitives::observation::WeightedNeighbor;

// ============================================================================
// Weighted Mean
// ============================================================================

/// Weighted arithmetic mean `sum(w_i * v_i) / sum(w_i)`.
pub fn weighted_mean<T: Float>(values: &[T], weights: &[T]) -> Result<T, LoessError> {
    Validator::validate_aligned(values.len(), weights.len())?;

    let (sum_w, sum_wv) = values
        .iter()
        .zip(weights)
        .fold((T::zero(), T::zero()), |(sw, swv), (&v, &w)| {
            (sw + w, swv + w * v)
        });

    if sum_w == T::zero() {
        return Err(LoessError::DegenerateWeights);
    }

    Ok(sum_wv / sum_w)
}

// ============================================================================
// LocalFit
// ============================================================================

/// Local linear fit result (slope and intercept) for one neighborhood.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFit<T> {
    /// Slope (beta_1)
    pub slope: T,

    /// Intercept (beta_0)
    pub intercept: T,

    /// Weighted mean of x-values
    pub x_mean: T,

    /// Weighted mean of y-values
    pub y_mean: T,
}

impl<T: Float> LocalFit<T> {
    /// Evaluate the fitted line at `x`.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.y_mean + self.slope * (x - self.x_mean)
    }

    /// Fit Weighted Least Squares (WLS) regression over a neighborhood.
    pub fn fit(neighbors: &[WeightedNeighbor<T>], weights: &[T]) -> Result<Self, LoessError> {
        Validator::validate_aligned(neighbors.len(), weights.len())?;

        // First pass: weighted sums for the means
        let mut sum_w = T::zero();
        let mut sum_wx = T::zero();
        let mut sum_wy = T::zero();
        let mut anchor_x: Option<T> = None;
        let mut spread = false;
        for (n, &w) in neighbors.iter().zip(weights) {
            let x = n.observation.x;
            sum_w = sum_w + w;
            sum_wx = sum_wx + w * x;
            sum_wy = sum_wy + w * n.observation.y;

            if w > T::zero() {
                match anchor_x {
                    None => anchor_x = Some(x),
                    Some(a) if a != x => spread = true,
                    Some(_) => {}
                }
            }
        }

        if sum_w == T::zero() {
            return Err(LoessError::DegenerateWeights);
        }

        let x_mean = sum_wx / sum_w;
        let y_mean = sum_wy / sum_w;

        // Second pass: centred cross and square terms
        let mut numerator = T::zero();
        let mut denominator = T::zero();
        for (n, &w) in neighbors.iter().zip(weights) {
            let dx = n.observation.x - x_mean;
            let dy = n.observation.y - y_mean;
            numerator = numerator + w * dx * dy;
            denominator = denominator + w * dx * dx;
        }

        // A single distinct weighted x leaves only rounding residue here.
        let slope = if !spread || denominator <= T::zero() {
            T::zero()
        } else {
            numerator / denominator
        };

        Ok(Self {
            slope,
            intercept: y_mean - slope * x_mean,
            x_mean,
            y_mean,
        })
    }
}
