//! Drag-reorder engine
//!
//! Turns a continuous pointer or touch path into one discrete reorder of the
//! item registry. There is one engine per session, so at most one drag is in
//! progress at a time.
//!
//! ```text
//! Idle --begin--> Dragging --release/blur/leave--> Idle
//! ```
//!
//! Every exit from `Dragging` goes through `finish`, which clears the drop
//! target and the proxy, and reports a `DragEnd` so the host can detach its
//! move/end listeners.


pub use hit_test::{HitTest, ItemRect, ItemRects, Point, Rect};

use crate::models::GridItemId;
use crate::registry::{ItemRegistry, Placement};
use log::{debug, info};
use serde::Serialize;

/// Upper bound for the proxy width, in pixels
const PROXY_MAX_WIDTH: f64 = 300.0;
/// Proxy width as a share of the dragged item's width
const PROXY_WIDTH_RATIO: f64 = 0.8;
/// 16:9
const PROXY_ASPECT: f64 = 0.5625;

/// Floating preview that follows the pointer while dragging
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DragProxy {
    pub thumbnail_url: String,
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
}

impl DragProxy {
    fn new(thumbnail_url: String, item_width: f64, pointer: Point) -> Self {
        let width = PROXY_MAX_WIDTH.min(item_width * PROXY_WIDTH_RATIO);
        Self {
            thumbnail_url,
            width,
            height: width * PROXY_ASPECT,
            x: pointer.x,
            y: pointer.y,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActiveDrag {
    pub item: GridItemId,
    pub drop_target: Option<GridItemId>,
    pub proxy: DragProxy,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(ActiveDrag),
}

/// Why a drag could not start
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragRefusal {
    AlreadyDragging,
    UnknownItem,
    /// The item is showing its removal prompt
    PendingRemoval,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DragEndReason {
    Released,
    WindowBlur,
    LeftViewport,
    /// Ended by the session, e.g. because the grid was cleared
    Aborted,
}

/// Result of leaving the `Dragging` state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragEnd {
    pub item: GridItemId,
    pub reason: DragEndReason,
    /// Target and placement when a reorder was committed
    pub committed: Option<(GridItemId, Placement)>,
}

#[derive(Clone, Debug)]
pub struct DragEngine {
    state: DragState,
    thumbnail_base_url: String,
}

impl DragEngine {
    pub fn new(thumbnail_base_url: impl Into<String>) -> Self {
        Self {
            state: DragState::Idle,
            thumbnail_base_url: thumbnail_base_url.into(),
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn dragged_item(&self) -> Option<GridItemId> {
        match &self.state {
            DragState::Dragging(drag) => Some(drag.item),
            DragState::Idle => None,
        }
    }

    pub fn drop_target(&self) -> Option<GridItemId> {
        match &self.state {
            DragState::Dragging(drag) => drag.drop_target,
            DragState::Idle => None,
        }
    }

    pub fn proxy(&self) -> Option<&DragProxy> {
        match &self.state {
            DragState::Dragging(drag) => Some(&drag.proxy),
            DragState::Idle => None,
        }
    }

    /// Start dragging `item` from `pointer`
    ///
    /// `item_width` is the rendered width of the item, used to size the proxy.
    /// Only reachable from `Idle`; items showing their removal prompt refuse.
    pub fn begin(
        &mut self,
        registry: &ItemRegistry,
        item: GridItemId,
        item_width: f64,
        pointer: Point,
    ) -> Result<(), DragRefusal> {
        if self.is_dragging() {
            debug!("drag start ignored: a drag is already active");
            return Err(DragRefusal::AlreadyDragging);
        }
        let record = registry.get(item).ok_or(DragRefusal::UnknownItem)?;
        if record.pending_removal {
            debug!("drag start refused: {} is pending removal", item);
            return Err(DragRefusal::PendingRemoval);
        }

        let thumbnail_url = format!("{}{}/mqdefault.jpg", self.thumbnail_base_url, record.source_ref());
        self.state = DragState::Dragging(ActiveDrag {
            item,
            drop_target: None,
            proxy: DragProxy::new(thumbnail_url, item_width, pointer),
        });
        info!("drag started: {}", item);
        Ok(())
    }

    /// Process one pointer sample; returns the current drop target
    pub fn move_to(&mut self, pointer: Point, hits: &impl HitTest) -> Option<GridItemId> {
        let DragState::Dragging(drag) = &mut self.state else {
            return None;
        };

        drag.proxy.x = pointer.x;
        drag.proxy.y = pointer.y;

        let dragged = drag.item;
        let target = hits.items_at(pointer).into_iter().find(|id| *id != dragged);
        if target != drag.drop_target {
            debug!("drop target: {:?}", target.map(|id| id.to_string()));
        }
        drag.drop_target = target;
        target
    }

    /// Finish the drag at `pointer`, committing a reorder onto the drop target
    ///
    /// The release position counts as a final move sample. Releasing over
    /// empty space or over the dragged item leaves the sequence unchanged.
    pub fn release(
        &mut self,
        pointer: Option<Point>,
        hits: &impl HitTest,
        registry: &mut ItemRegistry,
    ) -> Option<DragEnd> {
        if let Some(pointer) = pointer {
            self.move_to(pointer, hits);
        }

        let (item, target) = match &self.state {
            DragState::Dragging(drag) => (drag.item, drag.drop_target),
            DragState::Idle => return None,
        };

        // Leave `Dragging` before touching the registry so nothing can
        // observe a half-finished drag.
        let mut end = self.finish(DragEndReason::Released)?;
        end.committed = target.and_then(|target| {
            registry.reorder(item, target).map(|placement| (target, placement))
        });
        Some(end)
    }

    /// Abort the drag without reordering
    pub fn cancel(&mut self, reason: DragEndReason) -> Option<DragEnd> {
        self.finish(reason)
    }

    /// Abort if the pointer left through a viewport edge
    pub fn pointer_left(&mut self, pointer: Point, viewport_width: f64, viewport_height: f64) -> Option<DragEnd> {
        let outside = pointer.x <= 0.0
            || pointer.y <= 0.0
            || pointer.x >= viewport_width
            || pointer.y >= viewport_height;
        if outside {
            self.finish(DragEndReason::LeftViewport)
        } else {
            None
        }
    }

    fn finish(&mut self, reason: DragEndReason) -> Option<DragEnd> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging(drag) => {
                info!("drag ended: {} ({:?})", drag.item, reason);
                Some(DragEnd {
                    item: drag.item,
                    reason,
                    committed: None,
                })
            }
            DragState::Idle => None,
        }
    }
}
