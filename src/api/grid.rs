//! `VideoGrid` JavaScript class
//!
//! Thin wrapper over `Session`: every method converts JS values, calls the
//! session, and converts back. Timestamps default to `performance.now()`
//! when the host does not pass one.

use super::helpers::{deserialize, deserialize_or_default, host_now, serialize, to_js_error};
use crate::layout::compute_item_width;
use crate::models::GridSettings;
use crate::parse::extract_source_ref;
use crate::renderers::{project, render_grid_html};
use crate::session::{GridEvent, Session};
use wasm_bindgen::prelude::*;

/// One grid per page; owns all grid state for that page
#[wasm_bindgen]
pub struct VideoGrid {
    session: Session,
}

#[wasm_bindgen]
impl VideoGrid {
    /// Create a grid. `settings` may be `undefined` or a partial settings object.
    #[wasm_bindgen(constructor)]
    pub fn new(settings: JsValue) -> Result<VideoGrid, JsValue> {
        let settings: GridSettings = deserialize_or_default(settings, "Invalid grid settings")?;
        log::info!("VideoGrid created: {:?}", settings);
        Ok(VideoGrid {
            session: Session::new(settings),
        })
    }

    /// Apply one `GridEvent` (a `{ type: ..., ... }` object)
    ///
    /// Returns `{ changed, listeners }`, where `listeners` tells the host to
    /// attach or detach its document-level drag listeners.
    pub fn dispatch(&mut self, event: JsValue, now_ms: Option<f64>) -> Result<JsValue, JsValue> {
        let event: GridEvent = deserialize(event, "Invalid grid event")?;
        let outcome = self.session.dispatch(event, now_ms.unwrap_or_else(host_now));
        serialize(&outcome, "Failed to serialize dispatch outcome")
    }

    /// Advance timers; returns true if the view must be re-rendered
    pub fn tick(&mut self, now_ms: Option<f64>) -> bool {
        self.session.tick(now_ms.unwrap_or_else(host_now))
    }

    /// When the host should call `tick` next, if anything is pending
    #[wasm_bindgen(js_name = nextDeadline)]
    pub fn next_deadline(&self) -> Option<f64> {
        self.session.next_deadline()
    }

    /// Current view model
    pub fn view(&self) -> Result<JsValue, JsValue> {
        serialize(&project(&self.session), "Failed to serialize grid view")
    }

    /// Markup for every item, in display order
    #[wasm_bindgen(js_name = renderItemsHtml)]
    pub fn render_items_html(&self) -> Result<String, JsValue> {
        render_grid_html(&project(&self.session)).map_err(|e| to_js_error("Render failed", e))
    }

    /// Add a video directly, bypassing the input field
    ///
    /// Returns the new item id, or throws `"Invalid YouTube URL"`.
    #[wasm_bindgen(js_name = addSource)]
    pub fn add_source(&mut self, text: &str, now_ms: Option<f64>) -> Result<String, JsValue> {
        self.session
            .add_source(text, now_ms.unwrap_or_else(host_now))
            .map(|id| id.to_string())
            .map_err(|e| to_js_error("", e))
    }

    #[wasm_bindgen(js_name = itemCount)]
    pub fn item_count(&self) -> usize {
        self.session.registry().count()
    }

    /// Read the container's `clientWidth` and relayout immediately
    #[wasm_bindgen(js_name = measureContainer)]
    pub fn measure_container(&mut self, selector: &str) -> Result<u32, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| to_js_error("measureContainer", "no document"))?;
        let element = document
            .query_selector(selector)?
            .ok_or_else(|| to_js_error("measureContainer", format!("no element matches {}", selector)))?;
        let width = element.client_width().max(0) as u32;
        self.session.set_container_width(width);
        Ok(width)
    }
}

/// Extract the canonical video id from a URL or bare id
#[wasm_bindgen(js_name = extractVideoId)]
pub fn extract_video_id(input: &str) -> Option<String> {
    extract_source_ref(input)
}

/// Per-item width for a container width, column count and scale
#[wasm_bindgen(js_name = computeItemWidth)]
pub fn compute_item_width_js(container_width: u32, columns: u32, scale_percent: u32, min_width: u32) -> u32 {
    compute_item_width(container_width, columns, scale_percent, min_width)
}
