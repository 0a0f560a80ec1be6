//! Video Grid WASM API
//!
//! This module provides the JavaScript-facing API. The host creates one
//! `VideoGrid` per page, forwards every DOM gesture to `dispatch`, and
//! re-renders from `view()` whenever an outcome reports a change.
//!
//! # Module Structure
//!
//! - `helpers`: serde-wasm-bindgen bridging and error conversion
//! - `grid`: the `VideoGrid` class and free-standing utility exports

pub mod helpers;
pub mod grid;

pub use grid::{compute_item_width_js, extract_video_id, VideoGrid};
