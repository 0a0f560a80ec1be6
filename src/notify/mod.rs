//! Transient feedback: toast messages and the bulk-clear prompt
//!
//! Timers are driven by host timestamps passed into `tick`, so nothing here
//! schedules callbacks or touches the item sequence.

use serde::Serialize;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    Success,
    Error,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ToastPhase {
    Visible,
    FadingOut,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    /// Increments per toast so the host can tell a replacement from the same toast
    pub serial: u64,
    pub message: String,
    pub severity: Severity,
    pub phase: ToastPhase,
    #[serde(skip)]
    shown_at: f64,
}

/// Shows one toast at a time; a new toast replaces the current one
#[derive(Clone, Debug)]
pub struct Notifier {
    current: Option<Toast>,
    next_serial: u64,
    duration_ms: f64,
    fade_ms: f64,
}

impl Notifier {
    pub fn new(duration_ms: f64, fade_ms: f64) -> Self {
        Self {
            current: None,
            next_serial: 1,
            duration_ms,
            fade_ms,
        }
    }

    pub fn success(&mut self, message: impl Into<String>, now_ms: f64) {
        self.show(message, Severity::Success, now_ms);
    }

    pub fn error(&mut self, message: impl Into<String>, now_ms: f64) {
        self.show(message, Severity::Error, now_ms);
    }

    pub fn show(&mut self, message: impl Into<String>, severity: Severity, now_ms: f64) {
        let message = message.into();
        match severity {
            Severity::Success => log::info!("toast: {}", message),
            Severity::Error => log::warn!("toast: {}", message),
        }
        self.current = Some(Toast {
            serial: self.next_serial,
            message,
            severity,
            phase: ToastPhase::Visible,
            shown_at: now_ms,
        });
        self.next_serial += 1;
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Advance the toast lifecycle. Returns true if anything changed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let Some(toast) = self.current.as_mut() else {
            return false;
        };

        let age = now_ms - toast.shown_at;
        if age >= self.duration_ms + self.fade_ms {
            self.current = None;
            true
        } else if age >= self.duration_ms && toast.phase == ToastPhase::Visible {
            toast.phase = ToastPhase::FadingOut;
            true
        } else {
            false
        }
    }

    /// Timestamp of the next lifecycle step, if a toast is showing
    pub fn next_deadline(&self) -> Option<f64> {
        self.current.as_ref().map(|toast| match toast.phase {
            ToastPhase::Visible => toast.shown_at + self.duration_ms,
            ToastPhase::FadingOut => toast.shown_at + self.duration_ms + self.fade_ms,
        })
    }
}

/// Modal asking "Remove all videos?"
///
/// Bulk clear only happens through `confirm` while the modal is open, so a
/// repeated clear request cannot skip the question.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClearAllPrompt {
    visible: bool,
}

impl ClearAllPrompt {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    /// Close without clearing. Returns true if the modal was open.
    pub fn cancel(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }

    /// Close and report whether the clear may proceed
    pub fn confirm(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }
}
