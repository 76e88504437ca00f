//! Top-10 table.
//!
//! Sorted by score, highest first. Sorting is stable and new entries go in
//! after the existing ones, so on a tie the earlier entry keeps the better rank.

use crate::entry::HighScoreEntry;

/// Entries kept in the table
pub const MAX_ENTRIES: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighScoreTable {
    entries: Vec<HighScoreEntry>,
}

impl HighScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table from arbitrary entries (e.g. a hand-edited file): sorted and cut to size
    pub fn from_entries(mut entries: Vec<HighScoreEntry>) -> Self {
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(MAX_ENTRIES);
        Self { entries }
    }

    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<HighScoreEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a game with `score` would make it into the table
    pub fn qualifies(&self, score: u32) -> bool {
        self.entries.len() < MAX_ENTRIES
            || self.entries.last().is_some_and(|last| score > last.score)
    }

    /// Insert `entry`; returns its 0-based rank, or `None` if it did not make the cut
    pub fn insert(&mut self, entry: HighScoreEntry) -> Option<usize> {
        let rank = self
            .entries
            .iter()
            .position(|e| entry.score > e.score)
            .unwrap_or(self.entries.len());
        if rank >= MAX_ENTRIES {
            return None;
        }
        self.entries.insert(rank, entry);
        self.entries.truncate(MAX_ENTRIES);
        Some(rank)
    }
}
