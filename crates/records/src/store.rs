//! JSON file store for the high-score table.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::entry::HighScoreEntry;
use crate::table::HighScoreTable;

/// Where the table lives on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the table. A missing file is an empty table.
    pub fn load(&self) -> Result<HighScoreTable> {
        let bytes = match fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HighScoreTable::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("read {}", self.path.display()));
            }
        };
        let entries: Vec<HighScoreEntry> = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse {}", self.path.display()))?;
        Ok(HighScoreTable::from_entries(entries))
    }

    /// Read the table, logging and falling back to an empty one on failure
    pub fn load_or_default(&self) -> HighScoreTable {
        match self.load() {
            Ok(table) => table,
            Err(e) => {
                eprintln!("[Records] Could not load high scores: {:#}", e);
                HighScoreTable::new()
            }
        }
    }

    /// Write the whole table
    pub fn save(&self, table: &HighScoreTable) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        }
        let json = serde_json::to_vec_pretty(table.entries()).context("encode high scores")?;
        fs::write(&self.path, json).with_context(|| format!("write {}", self.path.display()))?;
        Ok(())
    }

    /// Load, insert `entry` and save.
    ///
    /// Returns the updated table and the entry's rank (if it made the cut).
    pub fn submit(&self, entry: HighScoreEntry) -> Result<(HighScoreTable, Option<usize>)> {
        let mut table = self.load_or_default();
        let rank = table.insert(entry);
        if rank.is_some() {
            self.save(&table)?;
        }
        Ok((table, rank))
    }
}
