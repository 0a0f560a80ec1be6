//! User gestures as discrete messages
//!
//! Each DOM listener in the host maps to exactly one `GridEvent`, which the
//! session applies synchronously.

use crate::drag::{DragEndReason, ItemRect, Point};
use crate::models::GridItemId;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum GridEvent {
    InputChanged { text: String },
    /// Add button or Enter in the input field
    Submit,
    RequestRemoval { id: GridItemId },
    /// Cancel button or a click outside the item's prompt
    CancelRemoval { id: GridItemId },
    ConfirmRemoval { id: GridItemId },
    RequestClearAll,
    CancelClearAll,
    ConfirmClearAll,
    IncreaseColumns,
    DecreaseColumns,
    SetScale { percent: u32 },
    ResetLayout,
    /// First measurement of the grid container; applied immediately
    ContainerMeasured { width: u32 },
    /// Window resize; coalesced before relayout
    ContainerResized { width: u32 },
    KeyDown {
        key: String,
        #[serde(default)]
        ctrl_key: bool,
        #[serde(default)]
        alt_key: bool,
        #[serde(default)]
        meta_key: bool,
    },
    OpenPanel,
    ClosePanel,
    TogglePanel,
    /// Mouse down or touch start on an item's move handle
    DragStart {
        id: GridItemId,
        x: f64,
        y: f64,
        /// Rendered width of the item, if the host measured it
        #[serde(default)]
        width: Option<f64>,
    },
    DragMove { x: f64, y: f64 },
    DragEnd { x: f64, y: f64 },
    WindowBlur,
    PointerLeave {
        x: f64,
        y: f64,
        viewport_width: f64,
        viewport_height: f64,
    },
    SetItemRects { rects: Vec<ItemRect> },
}

impl GridEvent {
    pub fn drag_start(id: GridItemId, point: Point) -> Self {
        GridEvent::DragStart {
            id,
            x: point.x,
            y: point.y,
            width: None,
        }
    }
}

/// What the host must do with its document-level drag listeners
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ListenerChange {
    Attach,
    Detach { reason: DragEndReason },
}

#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DispatchOutcome {
    /// The view changed and should be re-rendered
    pub changed: bool,
    pub listeners: Option<ListenerChange>,
}

impl DispatchOutcome {
    pub fn unchanged() -> Self {
        Self::default()
    }

    pub fn rerender() -> Self {
        Self {
            changed: true,
            listeners: None,
        }
    }

    pub fn from_flag(changed: bool) -> Self {
        Self {
            changed,
            listeners: None,
        }
    }
}
