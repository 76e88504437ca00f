//! High-score records.
//!
//! - [`entry`]: one finished game, as stored on disk
//! - [`table`]: the top-10 table and its ordering rules
//! - [`store`]: JSON file persistence
//!
//! The file is a flat JSON array of `{initials, score, lines, level, date}`
//! objects with no schema version.

pub mod entry;
pub mod store;
pub mod table;

pub use entry::{normalize_initials, today, HighScoreEntry, MAX_INITIALS};
pub use store::ScoreStore;
pub use table::{HighScoreTable, MAX_ENTRIES};
