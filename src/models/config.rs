//! Grid configuration and host-supplied settings
//!
//! `GridSettings` holds the constants the host may override at construction
//! time. `GridConfiguration` is the live, user-adjustable state (columns and
//! scale) bounded by those settings.

use crate::layout::DEFAULT_MIN_ITEM_WIDTH;
use serde::{Deserialize, Serialize};

/// Hard upper bound on the column count
pub const MAX_COLUMNS: u32 = 10;

/// Host-tunable constants for a grid session
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GridSettings {
    pub default_columns: u32,
    pub max_columns: u32,
    pub default_scale_percent: u32,
    /// Lowest value the size slider can reach
    pub min_scale_percent: u32,
    /// Floor for the computed item width, in pixels
    pub min_item_width: u32,
    pub resize_debounce_ms: f64,
    pub toast_duration_ms: f64,
    pub toast_fade_ms: f64,
    /// How long the side panel stays translucent after a layout change
    pub panel_fade_ms: f64,
    pub embed_base_url: String,
    pub thumbnail_base_url: String,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            default_columns: 2,
            max_columns: MAX_COLUMNS,
            default_scale_percent: 100,
            min_scale_percent: 10,
            min_item_width: DEFAULT_MIN_ITEM_WIDTH,
            resize_debounce_ms: 100.0,
            toast_duration_ms: 3000.0,
            toast_fade_ms: 300.0,
            panel_fade_ms: 1000.0,
            embed_base_url: "https://www.youtube.com/embed/".to_string(),
            thumbnail_base_url: "https://img.youtube.com/vi/".to_string(),
        }
    }
}

impl GridSettings {
    /// Clamp inconsistent values into a usable configuration
    ///
    /// `max_columns` is held to `1..=10` and `min_item_width` to at least
    /// 150px; hosts may tighten these bounds but never loosen them. Columns
    /// are kept in `1..=max_columns`, scale in `min_scale..=100`, and
    /// negative durations become zero.
    pub fn normalized(mut self) -> Self {
        self.max_columns = self.max_columns.clamp(1, MAX_COLUMNS);
        self.min_item_width = self.min_item_width.max(DEFAULT_MIN_ITEM_WIDTH);
        self.default_columns = self.default_columns.clamp(1, self.max_columns);
        self.min_scale_percent = self.min_scale_percent.min(100);
        self.default_scale_percent = self.default_scale_percent.clamp(self.min_scale_percent, 100);
        self.resize_debounce_ms = self.resize_debounce_ms.max(0.0);
        self.toast_duration_ms = self.toast_duration_ms.max(0.0);
        self.toast_fade_ms = self.toast_fade_ms.max(0.0);
        self.panel_fade_ms = self.panel_fade_ms.max(0.0);
        self
    }
}

/// Live column count and scale chosen by the user
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GridConfiguration {
    columns: u32,
    scale_percent: u32,
    max_columns: u32,
    min_scale_percent: u32,
}

impl GridConfiguration {
    /// Start from the defaults in `settings`
    pub fn from_settings(settings: &GridSettings) -> Self {
        Self {
            columns: settings.default_columns,
            scale_percent: settings.default_scale_percent,
            max_columns: settings.max_columns,
            min_scale_percent: settings.min_scale_percent,
        }
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn scale_percent(&self) -> u32 {
        self.scale_percent
    }

    pub fn min_scale_percent(&self) -> u32 {
        self.min_scale_percent
    }

    pub fn max_columns(&self) -> u32 {
        self.max_columns
    }

    /// Step the column count up by one. Returns false at the upper bound.
    pub fn increase_columns(&mut self) -> bool {
        if self.columns < self.max_columns {
            self.columns += 1;
            true
        } else {
            false
        }
    }

    /// Step the column count down by one. Returns false at 1.
    pub fn decrease_columns(&mut self) -> bool {
        if self.columns > 1 {
            self.columns -= 1;
            true
        } else {
            false
        }
    }

    /// Set the scale, clamped to the slider range. Returns true if it changed.
    pub fn set_scale_percent(&mut self, percent: u32) -> bool {
        let clamped = percent.clamp(self.min_scale_percent, 100);
        let changed = clamped != self.scale_percent;
        self.scale_percent = clamped;
        changed
    }

    /// Restore columns and scale to the defaults in `settings`
    pub fn reset(&mut self, settings: &GridSettings) {
        self.columns = settings.default_columns;
        self.scale_percent = settings.default_scale_percent;
    }
}
