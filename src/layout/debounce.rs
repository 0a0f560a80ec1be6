//! Trailing-edge debouncer driven by host timestamps
//!
//! The host reports each event with `trigger(now)` and polls with
//! `poll(now)`; the pending value is released once no new event has
//! arrived for the quiet period. Only the last value of a burst survives.

#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    quiet_ms: f64,
    pending: Option<(T, f64)>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet_ms: f64) -> Self {
        Self {
            quiet_ms,
            pending: None,
        }
    }

    /// Record an event, replacing any value still waiting
    pub fn trigger(&mut self, value: T, now_ms: f64) {
        self.pending = Some((value, now_ms));
    }

    /// Release the pending value if the quiet period has elapsed
    pub fn poll(&mut self, now_ms: f64) -> Option<T> {
        match self.pending {
            Some((_, last)) if now_ms - last >= self.quiet_ms => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Timestamp at which the pending value becomes due
    pub fn deadline(&self) -> Option<f64> {
        self.pending.as_ref().map(|(_, last)| last + self.quiet_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_collapses_to_last_value() {
        let mut debouncer = Debouncer::new(100.0);
        debouncer.trigger(800, 0.0);
        debouncer.trigger(900, 30.0);
        debouncer.trigger(1000, 60.0);

        assert_eq!(debouncer.poll(120.0), None);
        assert_eq!(debouncer.poll(160.0), Some(1000));
        assert_eq!(debouncer.poll(500.0), None);
    }

    #[test]
    fn test_nothing_fires_without_trigger() {
        let mut debouncer: Debouncer<u32> = Debouncer::new(100.0);
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(1_000.0), None);
    }

    #[test]
    fn test_deadline_moves_with_each_trigger() {
        let mut debouncer = Debouncer::new(100.0);
        debouncer.trigger((), 10.0);
        assert_eq!(debouncer.deadline(), Some(110.0));
        debouncer.trigger((), 50.0);
        assert_eq!(debouncer.deadline(), Some(150.0));
    }
}
