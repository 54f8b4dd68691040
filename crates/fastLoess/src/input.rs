//! Coordinate sequences accepted by the parallel model.
//!
//! ## Purpose
//!
//! Query points and observation coordinates arrive as slices, vectors,
//! fixed-size arrays or 1-D ndarray arrays. [`Coordinates`] reads any of them
//! as a run of x- or y-values and pairs an x-sequence with a y-sequence into
//! observations.
//!
//! ## Design notes
//!
//! * Contiguous storage is borrowed as-is; strided ndarray views are gathered
//!   into an owned buffer in logical order.
//! * Pairing goes through `Observation::from_arrays`, so length mismatches are
//!   reported exactly as the core crate reports them.
//!
//! ## Invariants
//!
//! * `values` yields every element, in iteration order.

// External dependencies
use std::borrow::Cow;

use ndarray::{ArrayBase, Data, Ix1};
use num_traits::Float;

// Export dependencies from loess crate
use loess::internals::api::{LoessError, Observation};

// ============================================================================
// Coordinates
// ============================================================================

/// A one-dimensional run of coordinate values.
pub trait Coordinates<T: Float> {
    /// The values in order, borrowed when the storage allows it.
    fn values(&self) -> Cow<'_, [T]>;

    /// Pair these x-values with `y` into observations.
    fn pair_with<Y>(&self, y: &Y) -> Result<Vec<Observation<T>>, LoessError>
    where
        Y: Coordinates<T> + ?Sized,
    {
        Observation::from_arrays(&self.values(), &y.values())
    }
}

impl<T: Float> Coordinates<T> for [T] {
    fn values(&self) -> Cow<'_, [T]> {
        Cow::Borrowed(self)
    }
}

impl<T: Float, const N: usize> Coordinates<T> for [T; N] {
    fn values(&self) -> Cow<'_, [T]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<T: Float> Coordinates<T> for Vec<T> {
    fn values(&self) -> Cow<'_, [T]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<T: Float, S> Coordinates<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn values(&self) -> Cow<'_, [T]> {
        match self.as_slice() {
            Some(slice) => Cow::Borrowed(slice),
            None => Cow::Owned(self.iter().copied().collect()),
        }
    }
}
