//! Held-control repeater.
//!
//! Models a control that acts once when pressed and then again every period
//! for as long as it stays down. Releasing stops it on the spot: there is no
//! trailing request for a partially elapsed period.

use crate::types::SOFT_DROP_REPEAT_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoldRepeater {
    period_ms: u32,
    held: bool,
    accumulated_ms: u32,
}

impl HoldRepeater {
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms: period_ms.max(1),
            held: false,
            accumulated_ms: 0,
        }
    }

    /// Repeater with the soft-drop cadence
    pub fn soft_drop() -> Self {
        Self::new(SOFT_DROP_REPEAT_MS)
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Press the control. Returns true when this issues the immediate request
    /// (false if it was already held).
    pub fn press(&mut self) -> bool {
        if self.held {
            return false;
        }
        self.held = true;
        self.accumulated_ms = 0;
        true
    }

    pub fn release(&mut self) {
        self.held = false;
        self.accumulated_ms = 0;
    }

    /// Milliseconds until the next repeat while held
    pub fn remaining_ms(&self) -> Option<u32> {
        self.held.then(|| self.period_ms - self.accumulated_ms)
    }

    /// Let `elapsed_ms` pass and return how many repeats fell due
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.held {
            return 0;
        }
        self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed_ms);
        let due = self.accumulated_ms / self.period_ms;
        self.accumulated_ms %= self.period_ms;
        due
    }
}

impl Default for HoldRepeater {
    fn default() -> Self {
        Self::soft_drop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_is_immediate_once() {
        let mut r = HoldRepeater::soft_drop();
        assert!(r.press());
        assert!(!r.press());
        assert!(r.is_held());
    }

    #[test]
    fn test_repeats_every_period_while_held() {
        let mut r = HoldRepeater::new(100);
        r.press();
        assert_eq!(r.advance(99), 0);
        assert_eq!(r.advance(1), 1);
        assert_eq!(r.advance(250), 2);
        assert_eq!(r.advance(50), 1);
    }

    #[test]
    fn test_release_has_no_trailing_request() {
        let mut r = HoldRepeater::new(100);
        r.press();
        r.advance(90);
        r.release();
        assert_eq!(r.advance(500), 0);
        // A fresh press starts a fresh period.
        assert!(r.press());
        assert_eq!(r.advance(50), 0);
    }
}
