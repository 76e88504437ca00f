//! Gravity clock.
//!
//! A periodic timer driven by elapsed time. Changing the period reschedules:
//! whatever had accumulated towards the old period is discarded, so the first
//! tick at the new cadence comes one full new interval after the change.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropClock {
    interval_ms: u32,
    accumulated_ms: u32,
    running: bool,
}

impl DropClock {
    /// Stopped clock with the given period
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulated_ms: 0,
            running: false,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Time accumulated towards the next tick
    pub fn accumulated_ms(&self) -> u32 {
        self.accumulated_ms
    }

    /// Start counting from zero
    pub fn start(&mut self) {
        self.running = true;
        self.accumulated_ms = 0;
    }

    /// Stop and forget accumulated time
    pub fn stop(&mut self) {
        self.running = false;
        self.accumulated_ms = 0;
    }

    /// Switch to a new period, restarting the count from zero
    pub fn reschedule(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms.max(1);
        self.accumulated_ms = 0;
    }

    /// Let `elapsed_ms` pass; ignored while stopped
    pub fn advance(&mut self, elapsed_ms: u32) {
        if self.running {
            self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed_ms);
        }
    }

    /// Consume one due tick, if any.
    ///
    /// Call in a loop: after a long stall several ticks can be due, and a tick
    /// may reschedule the clock, which drops the rest.
    pub fn take_due(&mut self) -> bool {
        if !self.running || self.accumulated_ms < self.interval_ms {
            return false;
        }
        self.accumulated_ms -= self.interval_ms;
        true
    }

    /// Milliseconds until the next tick (for poll timeouts)
    pub fn remaining_ms(&self) -> Option<u32> {
        self.running
            .then(|| self.interval_ms.saturating_sub(self.accumulated_ms))
    }
}
