//! Grid session
//!
//! One `Session` per page. It owns every piece of mutable state (the item
//! sequence, the configuration, the drag engine, feedback surfaces) and is
//! the only thing the host talks to. All gestures arrive through `dispatch`
//! and are applied synchronously; timers are advanced with `tick`.

pub mod events;
pub mod panel;

pub use events::{DispatchOutcome, GridEvent, ListenerChange};
pub use panel::SidePanel;

use crate::drag::{DragEnd, DragEndReason, DragEngine, ItemRects, Point};
use crate::layout::Debouncer;
use crate::models::{GridConfiguration, GridError, GridItemId, GridSettings};
use crate::notify::{ClearAllPrompt, Notifier};
use crate::registry::{ItemRegistry, LayoutInput};
use log::debug;

pub const MSG_ADDED: &str = "Video added successfully";
pub const MSG_CLEARED: &str = "All videos cleared";
pub const MSG_NOTHING_TO_CLEAR: &str = "No videos to clear";
pub const MSG_LAYOUT_RESET: &str = "Layout reset to default";

#[derive(Clone, Debug)]
pub struct Session {
    settings: GridSettings,
    config: GridConfiguration,
    registry: ItemRegistry,
    drag: DragEngine,
    rects: ItemRects,
    notifier: Notifier,
    clear_prompt: ClearAllPrompt,
    panel: SidePanel,
    input: String,
    container_width: u32,
    resize: Debouncer<u32>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GridSettings::default())
    }
}

impl Session {
    pub fn new(settings: GridSettings) -> Self {
        let settings = settings.normalized();
        Self {
            config: GridConfiguration::from_settings(&settings),
            registry: ItemRegistry::new(),
            drag: DragEngine::new(settings.thumbnail_base_url.clone()),
            rects: ItemRects::default(),
            notifier: Notifier::new(settings.toast_duration_ms, settings.toast_fade_ms),
            clear_prompt: ClearAllPrompt::default(),
            panel: SidePanel::default(),
            input: String::new(),
            container_width: 0,
            resize: Debouncer::new(settings.resize_debounce_ms),
            settings,
        }
    }

    // ------------------------------------------------------------------
    // Accessors used by the renderers
    // ------------------------------------------------------------------

    pub fn settings(&self) -> &GridSettings {
        &self.settings
    }

    pub fn config(&self) -> &GridConfiguration {
        &self.config
    }

    pub fn registry(&self) -> &ItemRegistry {
        &self.registry
    }

    pub fn drag(&self) -> &DragEngine {
        &self.drag
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn clear_prompt(&self) -> &ClearAllPrompt {
        &self.clear_prompt
    }

    pub fn panel(&self) -> &SidePanel {
        &self.panel
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn container_width(&self) -> u32 {
        self.container_width
    }

    pub fn layout_input(&self) -> LayoutInput {
        LayoutInput {
            container_width: self.container_width,
            columns: self.config.columns(),
            scale_percent: self.config.scale_percent(),
            min_width: self.settings.min_item_width,
        }
    }

    /// Width every item currently renders at
    pub fn item_width(&self) -> u32 {
        self.layout_input().item_width()
    }

    // ------------------------------------------------------------------
    // Event dispatch
    // ------------------------------------------------------------------

    /// Apply one user gesture at host time `now_ms`
    pub fn dispatch(&mut self, event: GridEvent, now_ms: f64) -> DispatchOutcome {
        match event {
            GridEvent::InputChanged { text } => {
                self.input = text;
                DispatchOutcome::unchanged()
            }
            GridEvent::Submit => DispatchOutcome::from_flag(self.submit(now_ms).is_some()),
            GridEvent::RequestRemoval { id } => DispatchOutcome::from_flag(self.request_removal(id)),
            GridEvent::CancelRemoval { id } => DispatchOutcome::from_flag(self.cancel_removal(id)),
            GridEvent::ConfirmRemoval { id } => DispatchOutcome::from_flag(self.confirm_removal(id)),
            GridEvent::RequestClearAll => {
                self.request_clear_all(now_ms);
                DispatchOutcome::rerender()
            }
            GridEvent::CancelClearAll => DispatchOutcome::from_flag(self.cancel_clear_all()),
            GridEvent::ConfirmClearAll => self.confirm_clear_all(now_ms),
            GridEvent::IncreaseColumns => DispatchOutcome::from_flag(self.increase_columns(now_ms)),
            GridEvent::DecreaseColumns => DispatchOutcome::from_flag(self.decrease_columns(now_ms)),
            GridEvent::SetScale { percent } => DispatchOutcome::from_flag(self.set_scale(percent, now_ms)),
            GridEvent::ResetLayout => {
                self.reset_layout(now_ms);
                DispatchOutcome::rerender()
            }
            GridEvent::ContainerMeasured { width } => {
                self.set_container_width(width);
                DispatchOutcome::rerender()
            }
            GridEvent::ContainerResized { width } => {
                self.container_resized(width, now_ms);
                DispatchOutcome::unchanged()
            }
            GridEvent::KeyDown {
                key,
                ctrl_key,
                alt_key,
                meta_key,
            } => DispatchOutcome::from_flag(self.key_down(&key, ctrl_key || alt_key || meta_key)),
            GridEvent::OpenPanel => {
                self.panel.open();
                DispatchOutcome::rerender()
            }
            GridEvent::ClosePanel => {
                self.panel.close();
                DispatchOutcome::rerender()
            }
            GridEvent::TogglePanel => {
                self.panel.toggle();
                DispatchOutcome::rerender()
            }
            GridEvent::DragStart { id, x, y, width } => {
                if self.begin_drag(id, Point::new(x, y), width) {
                    DispatchOutcome {
                        changed: true,
                        listeners: Some(ListenerChange::Attach),
                    }
                } else {
                    DispatchOutcome::unchanged()
                }
            }
            GridEvent::DragMove { x, y } => DispatchOutcome::from_flag(self.drag_move(Point::new(x, y))),
            GridEvent::DragEnd { x, y } => Self::ended(self.end_drag(Point::new(x, y))),
            GridEvent::WindowBlur => Self::ended(self.drag.cancel(DragEndReason::WindowBlur)),
            GridEvent::PointerLeave {
                x,
                y,
                viewport_width,
                viewport_height,
            } => Self::ended(self.drag.pointer_left(Point::new(x, y), viewport_width, viewport_height)),
            GridEvent::SetItemRects { rects } => {
                self.set_item_rects(ItemRects::new(rects));
                DispatchOutcome::unchanged()
            }
        }
    }

    fn ended(end: Option<DragEnd>) -> DispatchOutcome {
        match end {
            Some(end) => DispatchOutcome {
                changed: true,
                listeners: Some(ListenerChange::Detach { reason: end.reason }),
            },
            None => DispatchOutcome::unchanged(),
        }
    }

    /// Advance timers: pending resize, toast lifecycle, panel fade
    ///
    /// Returns true if the view changed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let mut changed = false;
        if let Some(width) = self.resize.poll(now_ms) {
            self.set_container_width(width);
            changed = true;
        }
        changed |= self.notifier.tick(now_ms);
        changed |= self.panel.tick(now_ms);
        changed
    }

    /// Earliest time at which `tick` has work to do
    pub fn next_deadline(&self) -> Option<f64> {
        [self.resize.deadline(), self.notifier.next_deadline(), self.panel.deadline()]
            .into_iter()
            .flatten()
            .reduce(f64::min)
    }

    // ------------------------------------------------------------------
    // Adding items
    // ------------------------------------------------------------------

    /// Add whatever is in the input field
    ///
    /// Blank input is ignored and yields `None`. A successful add clears the
    /// field; a failed one leaves it for correction.
    pub fn submit(&mut self, now_ms: f64) -> Option<Result<GridItemId, GridError>> {
        if self.input.trim().is_empty() {
            return None;
        }
        let text = self.input.clone();
        let result = self.add_source(&text, now_ms);
        if result.is_ok() {
            self.input.clear();
        }
        Some(result)
    }

    /// Add one video from pasted text and report the result as a toast
    pub fn add_source(&mut self, source_text: &str, now_ms: f64) -> Result<GridItemId, GridError> {
        let layout = self.layout_input();
        match self.registry.add(source_text, layout) {
            Ok(id) => {
                self.notifier.success(MSG_ADDED, now_ms);
                Ok(id)
            }
            Err(err) => {
                self.notifier.error(err.to_string(), now_ms);
                Err(err)
            }
        }
    }

    // ------------------------------------------------------------------
    // Removal
    // ------------------------------------------------------------------

    /// Show the removal prompt on `id`; refused while that item is dragged
    pub fn request_removal(&mut self, id: GridItemId) -> bool {
        if self.drag.dragged_item() == Some(id) {
            debug!("removal prompt refused: {} is being dragged", id);
            return false;
        }
        self.registry.request_removal(id)
    }

    pub fn cancel_removal(&mut self, id: GridItemId) -> bool {
        self.registry.cancel_removal(id)
    }

    /// Remove `id`, but only while its removal prompt is showing
    ///
    /// The dragged item can never carry a prompt, so this cannot delete it
    /// out from under the drag engine.
    pub fn confirm_removal(&mut self, id: GridItemId) -> bool {
        if !self.registry.get(id).map_or(false, |item| item.pending_removal) {
            debug!("removal of {} ignored: no prompt open", id);
            return false;
        }
        let removed = self.registry.confirm_removal(id).is_some();
        if removed {
            self.prune_rects();
        }
        removed
    }

    /// Open the bulk-clear modal, or complain if there is nothing to clear
    pub fn request_clear_all(&mut self, now_ms: f64) {
        if self.registry.is_empty() {
            self.notifier.error(MSG_NOTHING_TO_CLEAR, now_ms);
        } else {
            self.clear_prompt.open();
        }
    }

    pub fn cancel_clear_all(&mut self) -> bool {
        self.clear_prompt.cancel()
    }

    /// Clear every item if the modal is open
    pub fn confirm_clear_all(&mut self, now_ms: f64) -> DispatchOutcome {
        if !self.clear_prompt.confirm() {
            return DispatchOutcome::unchanged();
        }
        let aborted = self.drag.cancel(DragEndReason::Aborted);
        self.registry.clear_all();
        self.prune_rects();
        self.notifier.success(MSG_CLEARED, now_ms);
        DispatchOutcome {
            changed: true,
            listeners: aborted.map(|end| ListenerChange::Detach { reason: end.reason }),
        }
    }

    // ------------------------------------------------------------------
    // Layout controls
    // ------------------------------------------------------------------

    pub fn increase_columns(&mut self, now_ms: f64) -> bool {
        let changed = self.config.increase_columns();
        if changed {
            self.layout_changed(now_ms);
        }
        changed
    }

    pub fn decrease_columns(&mut self, now_ms: f64) -> bool {
        let changed = self.config.decrease_columns();
        if changed {
            self.layout_changed(now_ms);
        }
        changed
    }

    pub fn set_scale(&mut self, percent: u32, now_ms: f64) -> bool {
        let changed = self.config.set_scale_percent(percent);
        if changed {
            self.layout_changed(now_ms);
        }
        changed
    }

    pub fn reset_layout(&mut self, now_ms: f64) {
        self.config.reset(&self.settings);
        let layout = self.layout_input();
        self.registry.relayout(layout);
        self.notifier.success(MSG_LAYOUT_RESET, now_ms);
    }

    fn layout_changed(&mut self, now_ms: f64) {
        let layout = self.layout_input();
        self.registry.relayout(layout);
        self.panel.flash(now_ms, self.settings.panel_fade_ms);
    }

    /// Apply a container width immediately
    pub fn set_container_width(&mut self, width: u32) {
        self.container_width = width;
        let layout = self.layout_input();
        let item_width = self.registry.relayout(layout);
        debug!("container width {}px -> item width {}px", width, item_width);
    }

    /// Queue a container width; applied by `tick` once resizing settles
    pub fn container_resized(&mut self, width: u32, now_ms: f64) {
        self.resize.trigger(width, now_ms);
    }

    // ------------------------------------------------------------------
    // Keyboard
    // ------------------------------------------------------------------

    /// Handle a key press; `modified` is true if ctrl, alt or meta is held
    pub fn key_down(&mut self, key: &str, modified: bool) -> bool {
        match key {
            "Shift" if !modified => {
                self.panel.toggle();
                true
            }
            "Escape" => self.clear_prompt.cancel(),
            _ => false,
        }
    }

    // ------------------------------------------------------------------
    // Dragging
    // ------------------------------------------------------------------

    /// Start dragging `id`
    ///
    /// The proxy is sized from `width` if given, else from the last measured
    /// rect, else from the item's layout width.
    pub fn begin_drag(&mut self, id: GridItemId, pointer: Point, width: Option<f64>) -> bool {
        let item_width = width
            .or_else(|| self.rects.rect_of(id).map(|rect| rect.width))
            .or_else(|| self.registry.get(id).map(|item| f64::from(item.display_width)))
            .unwrap_or(0.0);
        self.drag.begin(&self.registry, id, item_width, pointer).is_ok()
    }

    /// Returns true while a drag is active (the proxy moved)
    pub fn drag_move(&mut self, pointer: Point) -> bool {
        if !self.drag.is_dragging() {
            return false;
        }
        self.drag.move_to(pointer, &self.rects);
        true
    }

    pub fn end_drag(&mut self, pointer: Point) -> Option<DragEnd> {
        self.drag.release(Some(pointer), &self.rects, &mut self.registry)
    }

    /// Replace the measured item rectangles used for drop targeting
    ///
    /// The host re-sends these after each re-render. Rects for ids the
    /// registry no longer holds are dropped on arrival and on removal.
    pub fn set_item_rects(&mut self, rects: ItemRects) {
        self.rects = rects;
        self.prune_rects();
    }

    fn prune_rects(&mut self) {
        let registry = &self.registry;
        self.rects.retain(|id| registry.get(id).is_some());
    }
}
