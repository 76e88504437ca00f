//! Touch gesture classification.
//!
//! A gesture is judged only from where it started and ended and how long it
//! took:
//!
//! | Gesture | Condition | Action |
//! |---------|-----------|--------|
//! | tap | `abs(dx) < 30`, `abs(dy) < 30`, `< 200ms` | rotate |
//! | horizontal swipe | `abs(dx) > abs(dy)`, `abs(dx) > 30` | move left/right |
//! | fast down swipe | vertical, `dy > 30`, `< 150ms` | hard drop |
//! | slow down swipe | vertical, `dy > 30`, `>= 150ms` | soft drop |
//!
//! Anything else (upward swipes, slow taps) is ignored.

use crate::types::GameAction;

/// Distance (in screen units) that separates a tap from a swipe
pub const SWIPE_THRESHOLD: f32 = 30.0;

/// A touch shorter than this that barely moved is a tap
pub const TAP_MAX_MS: u32 = 200;

/// A downward swipe shorter than this is a hard drop
pub const FAST_SWIPE_MAX_MS: u32 = 150;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
    pub time_ms: u64,
}

impl TouchPoint {
    pub fn new(x: f32, y: f32, time_ms: u64) -> Self {
        Self { x, y, time_ms }
    }
}

/// Classify a finished gesture from its displacement and duration
pub fn classify_gesture(dx: f32, dy: f32, duration_ms: u32) -> Option<GameAction> {
    let abs_x = dx.abs();
    let abs_y = dy.abs();

    if abs_x < SWIPE_THRESHOLD && abs_y < SWIPE_THRESHOLD && duration_ms < TAP_MAX_MS {
        return Some(GameAction::Rotate);
    }

    if abs_x > abs_y {
        if dx > SWIPE_THRESHOLD {
            Some(GameAction::MoveRight)
        } else if dx < -SWIPE_THRESHOLD {
            Some(GameAction::MoveLeft)
        } else {
            None
        }
    } else if dy > SWIPE_THRESHOLD {
        if duration_ms < FAST_SWIPE_MAX_MS {
            Some(GameAction::HardDrop)
        } else {
            Some(GameAction::SoftDrop)
        }
    } else {
        None
    }
}

/// Pairs touch-start with touch-end
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    start: Option<TouchPoint>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, point: TouchPoint) {
        self.start = Some(point);
    }

    /// Finish the gesture; an end without a start is ignored
    pub fn end(&mut self, point: TouchPoint) -> Option<GameAction> {
        let start = self.start.take()?;
        let duration = point.time_ms.saturating_sub(start.time_ms);
        classify_gesture(
            point.x - start.x,
            point.y - start.y,
            u32::try_from(duration).unwrap_or(u32::MAX),
        )
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }
}
