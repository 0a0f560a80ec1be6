//! Layout module for the Video Grid
//!
//! Width calculation for grid items and coalescing of container resizes.

pub mod calculator;
pub mod debounce;

// Re-export commonly used types
pub use calculator::*;
pub use debounce::Debouncer;
