//! Layer 3: Algorithms
//!
//! This layer implements the core logic of a local fit: choosing the
//! neighborhood of a query point and fitting a weighted line through it.
//! It is orchestrated by the engine layer.

// Bandwidth-window neighbor selection.
pub mod neighborhood;

// Local weighted linear regression.
pub mod regression;
