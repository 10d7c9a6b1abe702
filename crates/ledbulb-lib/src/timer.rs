//! Blink timer state — interval and enabled flag, ticked by the host.
//!
//! The component doesn't own a thread or an event loop; the host's periodic
//! timer facility delivers ticks. This struct is the registration state the
//! host reads to know whether and how often to tick.

use std::time::Duration;

/// Periodic tick registration owned by the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlinkTimer {
    interval_ms: u64,
    enabled: bool,
}

impl BlinkTimer {
    pub fn new() -> Self {
        BlinkTimer::default()
    }

    /// Current tick interval in milliseconds. Unvalidated pass-through:
    /// degenerate values go straight to the host timer facility.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn set_interval(&mut self, ms: u64) {
        self.interval_ms = ms;
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn start(&mut self) {
        self.enabled = true;
    }

    pub fn stop(&mut self) {
        self.enabled = false;
    }

    /// Delay until the next tick the host should deliver, or `None` when
    /// the timer is stopped.
    pub fn schedule(&self) -> Option<Duration> {
        self.enabled
            .then(|| Duration::from_millis(self.interval_ms))
    }
}
