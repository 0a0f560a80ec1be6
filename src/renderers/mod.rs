//! Renderers module for the Video Grid
//!
//! Rendering is a pure projection of the session: `project` builds a
//! serializable view model after every mutation, and `html` turns item views
//! into markup for hosts that want it ready-made.

pub mod html;
pub mod view;

// Re-export commonly used types
pub use html::{render_grid_html, render_item_html};
pub use view::{project, GridView, ItemView, PanelView};
