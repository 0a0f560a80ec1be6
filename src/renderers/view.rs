//! View model projection
//!
//! `project` reads a session and produces everything the page needs to draw
//! itself. It never mutates state, so the host can call it as often as it
//! likes.

use crate::drag::DragProxy;
use crate::models::{GridItem, GridItemId};
use crate::notify::Toast;
use crate::session::Session;
use serde::Serialize;

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    pub id: GridItemId,
    pub source_ref: String,
    pub width: u32,
    pub embed_url: String,
    pub dragging: bool,
    pub drop_target: bool,
    pub showing_confirmation: bool,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PanelView {
    pub open: bool,
    pub translucent: bool,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GridView {
    pub items: Vec<ItemView>,
    pub count: usize,
    pub empty_state_visible: bool,
    pub columns: u32,
    pub max_columns: u32,
    pub scale_percent: u32,
    pub min_scale_percent: u32,
    pub scale_label: String,
    pub item_width: u32,
    pub input: String,
    pub is_dragging: bool,
    pub drag_proxy: Option<DragProxy>,
    pub toast: Option<Toast>,
    pub clear_all_modal_visible: bool,
    pub panel: PanelView,
}

/// Build the view model for the current session state
pub fn project(session: &Session) -> GridView {
    let drag = session.drag();
    let dragged = drag.dragged_item();
    let target = drag.drop_target();
    let embed_base = &session.settings().embed_base_url;

    let items = session
        .registry()
        .items()
        .iter()
        .map(|item| item_view(item, embed_base, dragged, target))
        .collect();

    let config = session.config();
    let count = session.registry().count();

    GridView {
        items,
        count,
        empty_state_visible: count == 0,
        columns: config.columns(),
        max_columns: config.max_columns(),
        scale_percent: config.scale_percent(),
        min_scale_percent: config.min_scale_percent(),
        scale_label: format!("{}%", config.scale_percent()),
        item_width: session.item_width(),
        input: session.input().to_string(),
        is_dragging: drag.is_dragging(),
        drag_proxy: drag.proxy().cloned(),
        toast: session.notifier().current().cloned(),
        clear_all_modal_visible: session.clear_prompt().is_visible(),
        panel: PanelView {
            open: session.panel().open,
            translucent: session.panel().is_translucent(),
        },
    }
}

fn item_view(
    item: &GridItem,
    embed_base: &str,
    dragged: Option<GridItemId>,
    target: Option<GridItemId>,
) -> ItemView {
    ItemView {
        id: item.id(),
        source_ref: item.source_ref().to_string(),
        width: item.display_width,
        embed_url: format!("{}{}?enablejsapi=1", embed_base, item.source_ref()),
        dragging: dragged == Some(item.id()),
        drop_target: target == Some(item.id()),
        showing_confirmation: item.pending_removal,
    }
}
