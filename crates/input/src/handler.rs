//! Held soft-drop tracking for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! every press (including OS auto-repeat) refreshes the hold, and a hold that
//! has not been refreshed for the timeout is released.

use crossterm::event::KeyCode;

use arrayvec::ArrayVec;

use crate::map::is_soft_drop_key;

/// Edge of the held soft-drop control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldSignal {
    Press,
    Release,
}

/// Tracks whether the soft-drop key is down.
#[derive(Debug, Clone)]
pub struct InputHandler {
    down_held: bool,
    idle_ms: u32,
    key_release_timeout_ms: u32,
}

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state that keeps repeating soft drops.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

impl InputHandler {
    pub fn new() -> Self {
        Self {
            down_held: false,
            idle_ms: 0,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn is_held(&self) -> bool {
        self.down_held
    }

    /// A press (or auto-repeat) of `code`; `Press` only on the first one
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<HoldSignal> {
        if !is_soft_drop_key(code) {
            return None;
        }
        self.idle_ms = 0;
        if self.down_held {
            None
        } else {
            self.down_held = true;
            Some(HoldSignal::Press)
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) -> Option<HoldSignal> {
        if is_soft_drop_key(code) && self.down_held {
            self.reset();
            return Some(HoldSignal::Release);
        }
        None
    }

    /// Let `elapsed_ms` pass without input on the soft-drop key
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<HoldSignal, 1> {
        let mut signals = ArrayVec::new();
        if !self.down_held {
            return signals;
        }

        // Auto-release when terminal does not emit release events.
        self.idle_ms = self.idle_ms.saturating_add(elapsed_ms);
        if self.idle_ms > self.key_release_timeout_ms {
            self.reset();
            signals.push(HoldSignal::Release);
        }
        signals
    }

    pub fn reset(&mut self) {
        self.down_held = false;
        self.idle_ms = 0;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_press_holds_repeats_do_not() {
        let mut ih = InputHandler::new();
        assert_eq!(ih.handle_key_press(KeyCode::Down), Some(HoldSignal::Press));
        assert_eq!(ih.handle_key_press(KeyCode::Down), None);
        assert!(ih.is_held());
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mut ih = InputHandler::new();
        assert_eq!(ih.handle_key_press(KeyCode::Left), None);
        assert_eq!(ih.handle_key_release(KeyCode::Left), None);
        assert!(!ih.is_held());
    }

    #[test]
    fn test_release_event_releases() {
        let mut ih = InputHandler::new();
        ih.handle_key_press(KeyCode::Down);
        assert_eq!(ih.handle_key_release(KeyCode::Down), Some(HoldSignal::Release));
        assert_eq!(ih.handle_key_release(KeyCode::Down), None);
    }

    #[test]
    fn test_auto_release_triggers_after_timeout_without_key_release_events() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);
        ih.handle_key_press(KeyCode::Down);

        assert!(ih.update(50).is_empty());
        assert_eq!(ih.update(1).as_slice(), &[HoldSignal::Release]);
        assert!(!ih.is_held());
        assert!(ih.update(1000).is_empty());
    }

    #[test]
    fn test_auto_repeat_keeps_hold_alive() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);
        ih.handle_key_press(KeyCode::Down);
        for _ in 0..10 {
            assert!(ih.update(40).is_empty());
            assert_eq!(ih.handle_key_press(KeyCode::Down), None);
        }
        assert!(ih.is_held());
    }

    #[test]
    fn test_non_soft_drop_key_does_not_extend_timeout() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);
        ih.handle_key_press(KeyCode::Down);
        ih.update(40);
        ih.handle_key_press(KeyCode::Up);
        assert_eq!(ih.update(11).as_slice(), &[HoldSignal::Release]);
    }

    #[test]
    fn test_default_key_release_timeout() {
        assert_eq!(InputHandler::new().key_release_timeout_ms(), 150);
    }
}
