//! Input mapping (engine-facing).
//!
//! Everything here turns raw input into [`crate::types::GameAction`]s or
//! soft-drop hold signals and is independent of any UI framework:
//!
//! - [`map`]: `crossterm` key events, per game status
//! - [`handler`]: held soft-drop tracking, including terminals without
//!   key-release events
//! - [`gesture`]: tap/swipe classification for touch front-ends

pub mod gesture;
pub mod handler;
pub mod map;

pub use retro_tetris_types as types;

pub use gesture::{classify_gesture, GestureTracker, TouchPoint};
pub use handler::{HoldSignal, InputHandler};
pub use map::{handle_key_event, is_interrupt, is_soft_drop_key, should_quit};
