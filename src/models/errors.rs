//! Error types for grid operations
//!
//! The core has a single recoverable error: input that names no video.
//! Everything else (removing a missing id, dropping onto nothing) is a
//! silent no-op.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// No supported URL shape or bare token matched the input
    #[error("Invalid YouTube URL")]
    InvalidSourceReference { input: String },
}

/// Failures producing markup for the rendering collaborator
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] mustache::Error),
}
