//! Parsing module for the Video Grid
//!
//! This module turns pasted user input into canonical video tokens.

pub mod source_ref;

// Re-export commonly used types
pub use source_ref::*;
