//! Models module for the Video Grid
//!
//! This module contains the data models shared by the registry,
//! the drag engine and the renderers.

pub mod config;
pub mod errors;
pub mod item;

// Re-export commonly used types
pub use config::{GridConfiguration, GridSettings};
pub use errors::{GridError, RenderError};
pub use item::{GridItem, GridItemId};
