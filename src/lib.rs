//! Video Grid WASM Module
//!
//! Layout manager for embedding and arranging video players on one page:
//! paste links, size the grid, drag items into a new order, remove them.
//! The core is plain Rust and testable natively; `api` exposes it to the
//! browser through wasm-bindgen.

pub mod models;
pub mod parse;
pub mod layout;
pub mod registry;
pub mod drag;
pub mod notify;
pub mod session;
pub mod renderers;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use registry::{ItemRegistry, LayoutInput, Placement};
pub use session::{DispatchOutcome, GridEvent, Session};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();

    log::info!("Video Grid WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger not installed: {}", e).into());
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
