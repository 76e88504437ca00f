//! Retro Tetris (workspace facade crate).
//!
//! Re-exports the member crates under short names and holds the pieces that
//! tie them into a program: configuration, the JSONL event log and the screen
//! flow driven by `main`.

pub use retro_tetris_audio as audio;
pub use retro_tetris_core as core;
pub use retro_tetris_engine as engine;
pub use retro_tetris_input as input;
pub use retro_tetris_records as records;
pub use retro_tetris_term as term;
pub use retro_tetris_types as types;

pub mod app;
pub mod config;
pub mod event_log;

pub use app::App;
pub use config::AppConfig;
pub use event_log::EventLog;
