//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules, state management and simulation logic.
//! It has **no dependencies** on UI, audio, storage or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is covered by unit and integration tests
//! - **Portable**: Drives the terminal front-end, headless tests and benchmarks alike
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 game board with collision detection and line clearing
//! - [`game_state`]: The [`GameSession`] state machine (spawn, move, rotate, drop, lock)
//! - [`pieces`]: Tetromino shape masks and clockwise rotation
//! - [`rng`]: Seeded LCG and uniform piece picker
//! - [`scoring`]: Line clear points, level and drop interval formulas
//! - [`snapshot`]: Read-only projection of a session for presentation
//!
//! # Game Rules
//!
//! This implementation follows the classic rules of the original browser game:
//!
//! - **Uniform Randomizer**: Every piece is an independent draw; repeats are possible
//! - **Plain Rotation**: 90° clockwise, rejected when blocked (no wall kicks)
//! - **Immediate Lock**: A blocked downward move locks the piece at once
//! - **Scoring**: 40/100/300/1200 points times the level
//!
//! # Example
//!
//! ```
//! use retro_tetris_core::GameSession;
//! use retro_tetris_types::{GameAction, GameStatus};
//!
//! // Create and start a game
//! let mut game = GameSession::new(12345);
//! game.start();
//! assert_eq!(game.status(), GameStatus::Playing);
//!
//! // Apply game actions
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // The first piece is locked and a new one is in play
//! assert_eq!(game.pieces_locked(), 1);
//! ```
//!
//! # Timing
//!
//! The session itself has no clock. Automatic descent is a call to
//! [`GameSession::tick`] at the interval reported by
//! [`GameSession::drop_interval_ms`]; the `retro-tetris-engine` crate owns that clock.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use retro_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{collides, Board, LineClear};
pub use game_state::{ActivePiece, GameSession, MoveOutcome};
pub use pieces::{pick_random_piece, shape_for, Piece, Shape};
pub use rng::{PiecePicker, SimpleRng};
pub use scoring::{
    drop_interval_ms, is_tetris, level_for_lines, line_clear_points, LineClearSummary, ScoreState,
};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
