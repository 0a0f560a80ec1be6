//! Item registry
//!
//! Owns the ordered sequence of grid items. An item's position is its index
//! in the sequence; reordering permutes the sequence and never touches the
//! items themselves. Every operation either fully applies or leaves the
//! sequence untouched.

use crate::layout::compute_item_width;
use crate::models::{GridError, GridItem, GridItemId};
use crate::parse::extract_source_ref;
use log::{debug, info};

/// Container width and sizing inputs for a layout pass
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutInput {
    pub container_width: u32,
    pub columns: u32,
    pub scale_percent: u32,
    pub min_width: u32,
}

impl LayoutInput {
    pub fn item_width(&self) -> u32 {
        compute_item_width(self.container_width, self.columns, self.scale_percent, self.min_width)
    }
}

/// Where a moved item lands relative to its drop target
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Before,
    After,
}

#[derive(Clone, Debug, Default)]
pub struct ItemRegistry {
    items: Vec<GridItem>,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract a token from `source_text` and append a new item for it
    ///
    /// On failure nothing is mutated. On success every item is resized to
    /// the current layout width, so the new item matches its neighbours.
    pub fn add(&mut self, source_text: &str, layout: LayoutInput) -> Result<GridItemId, GridError> {
        let source_ref = extract_source_ref(source_text).ok_or_else(|| {
            debug!("rejected source input: {:?}", source_text);
            GridError::InvalidSourceReference {
                input: source_text.to_string(),
            }
        })?;

        let width = layout.item_width();
        let item = GridItem::new(source_ref, width);
        let id = item.id();
        self.items.push(item);
        self.apply_width(width);

        info!("added item {} ({} items)", id, self.items.len());
        Ok(id)
    }

    /// Show the removal prompt for `id`. Returns false if the id is unknown.
    pub fn request_removal(&mut self, id: GridItemId) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                item.pending_removal = true;
                true
            }
            None => false,
        }
    }

    /// Dismiss the removal prompt for `id`
    pub fn cancel_removal(&mut self, id: GridItemId) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                item.pending_removal = false;
                true
            }
            None => false,
        }
    }

    /// Delete `id` from the sequence; unknown ids are a no-op
    pub fn confirm_removal(&mut self, id: GridItemId) -> Option<GridItem> {
        let index = self.index_of(id)?;
        let removed = self.items.remove(index);
        info!("removed item {} ({} items left)", id, self.items.len());
        Some(removed)
    }

    /// Delete every item. Returns how many were removed.
    pub fn clear_all(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        info!("cleared {} items", removed);
        removed
    }

    /// Move `moved` next to `target`
    ///
    /// The item goes after the target when it started before it, and before
    /// the target otherwise. All other items keep their relative order.
    /// Returns the placement used, or `None` when either id is missing or
    /// both name the same item.
    pub fn reorder(&mut self, moved: GridItemId, target: GridItemId) -> Option<Placement> {
        if moved == target {
            return None;
        }
        let from = self.index_of(moved)?;
        let to = self.index_of(target)?;

        let placement = if from < to {
            self.items[from..=to].rotate_left(1);
            Placement::After
        } else {
            self.items[to..=from].rotate_right(1);
            Placement::Before
        };

        debug!("reordered {} {:?} {} (index {} -> {})", moved, placement, target, from, to);
        Some(placement)
    }

    /// Recompute and apply the width of every item
    pub fn relayout(&mut self, layout: LayoutInput) -> u32 {
        let width = layout.item_width();
        self.apply_width(width);
        width
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[GridItem] {
        &self.items
    }

    pub fn ids(&self) -> Vec<GridItemId> {
        self.items.iter().map(GridItem::id).collect()
    }

    pub fn get(&self, id: GridItemId) -> Option<&GridItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn index_of(&self, id: GridItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    fn get_mut(&mut self, id: GridItemId) -> Option<&mut GridItem> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    fn apply_width(&mut self, width: u32) {
        for item in &mut self.items {
            item.display_width = width;
        }
    }
}
