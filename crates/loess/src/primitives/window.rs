//! Windowing primitives for LOESS smoothing.
//!
//! A window is the closed x-interval centred on a query point whose width is
//! a fixed fraction (the bandwidth) of the full x-range of the data. The same
//! width is used for every query point; it does not adapt to local density.

// External dependencies
use num_traits::Float;

// Inclusive window bounds `[lower, upper]` around a query point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Window<T> {
    // Lower x bound (inclusive).
    pub lower: T,

    // Upper x bound (inclusive).
    pub upper: T,
}

impl<T: Float> Window<T> {
    // Centre a window of `bandwidth * total_width` on `query_x`.
    #[inline]
    pub fn around(query_x: T, bandwidth: T, total_width: T) -> Self {
        debug_assert!(
            total_width >= T::zero(),
            "Window::around: total_width must be non-negative"
        );

        let two = T::one() + T::one();
        let window_width = bandwidth * total_width;
        Self {
            lower: query_x - window_width / two,
            upper: query_x + window_width / two,
        }
    }

    // Check whether `x` lies inside the window (both ends inclusive).
    #[inline]
    pub fn contains(&self, x: T) -> bool {
        x >= self.lower && x <= self.upper
    }
}
