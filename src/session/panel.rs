//! Side panel visibility
//!
//! The panel holds the input and layout controls. While the user adjusts the
//! layout it turns translucent so the grid underneath stays visible.

use serde::Serialize;

#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SidePanel {
    pub open: bool,
    #[serde(skip)]
    translucent_until: Option<f64>,
}

impl SidePanel {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn is_translucent(&self) -> bool {
        self.translucent_until.is_some()
    }

    /// Go translucent until `now_ms + fade_ms`, restarting any running fade
    pub fn flash(&mut self, now_ms: f64, fade_ms: f64) {
        self.translucent_until = Some(now_ms + fade_ms);
    }

    /// Returns true when the panel turned solid again
    pub fn tick(&mut self, now_ms: f64) -> bool {
        match self.translucent_until {
            Some(until) if now_ms >= until => {
                self.translucent_until = None;
                true
            }
            _ => false,
        }
    }

    pub fn deadline(&self) -> Option<f64> {
        self.translucent_until
    }
}
