//! Terminal presentation.
//!
//! Views draw into a [`FrameBuffer`] without touching the terminal;
//! [`TerminalRenderer`] diffs frames and writes the changes with crossterm.
//! Board cells are two columns wide to roughly square them up.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screens;

pub use retro_tetris_core as core;
pub use retro_tetris_records as records;
pub use retro_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{FrameRect, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screens::{render_game_over, render_start_screen, GameOverView, InitialsPrompt, StartPage};
