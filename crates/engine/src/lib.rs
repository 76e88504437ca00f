//! Timing driver for the game session.
//!
//! The core session has no clock. This crate supplies the two timers the game
//! needs and a [`GameDriver`] that owns them together with the session:
//!
//! - [`DropClock`]: gravity, firing at the session's current drop interval
//! - [`HoldRepeater`]: repeated soft drop while the control is held
//!
//! Both are advanced by elapsed milliseconds, so the driver is equally happy
//! behind a real-time loop and inside a test that fakes time.

pub mod clock;
pub mod driver;
pub mod repeat;

pub use retro_tetris_types as types;

pub use clock::DropClock;
pub use driver::{GameDriver, GameObserver};
pub use repeat::HoldRepeater;
