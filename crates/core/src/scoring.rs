//! Scoring module - classic line clear points and level progression
//!
//! - Points: `LINE_SCORES[lines - 1] * level` for 1..=4 lines
//! - Level: `total_lines / 10 + 1`
//! - Gravity: `max(100, 1000 - (level - 1) * 100)` ms per row
//!
//! A four-line clear is a "tetris". It is reported separately for presentation
//! and audio but earns nothing beyond the table value.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_INTERVAL_STEP_MS, LINES_PER_LEVEL, LINE_SCORES,
    START_LEVEL, TETRIS_LINES,
};

/// Calculate line clear score
/// lines: number of lines cleared (1-4)
/// level: current level (1-based)
pub fn line_clear_points(lines: u32, level: u32) -> u32 {
    if lines == 0 || lines as usize > LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines as usize - 1].saturating_mul(level)
}

/// Level reached after `total_lines` cleared lines
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + START_LEVEL
}

/// Get drop interval in milliseconds for a level
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level
        .saturating_sub(START_LEVEL)
        .saturating_mul(DROP_INTERVAL_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}

/// Whether a clear of `lines` rows is a tetris
pub fn is_tetris(lines: u32) -> bool {
    lines == TETRIS_LINES
}

/// Outcome of applying one lock's cleared lines to the running totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LineClearSummary {
    /// Rows removed by this lock (1-4)
    pub lines: u32,
    /// Points awarded for this lock
    pub points: u32,
    /// Four rows at once
    pub tetris: bool,
    /// Level before the clear (the multiplier used)
    pub level: u32,
}

/// Running score/lines/level totals of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreState {
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
}

impl ScoreState {
    pub fn new() -> Self {
        Self {
            score: 0,
            lines: 0,
            level: START_LEVEL,
            drop_interval_ms: BASE_DROP_MS,
        }
    }

    /// Apply `lines` cleared rows and return what happened.
    ///
    /// Returns `None` when nothing was cleared; the totals stay as they are.
    /// The level only ever moves up, and the drop interval is recomputed only
    /// when it does.
    pub fn apply_clear(&mut self, lines: u32) -> Option<(LineClearSummary, bool)> {
        if lines == 0 {
            return None;
        }

        let points = line_clear_points(lines, self.level);
        let summary = LineClearSummary {
            lines,
            points,
            tetris: is_tetris(lines),
            level: self.level,
        };

        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(lines);

        let new_level = level_for_lines(self.lines);
        let level_up = new_level > self.level;
        if level_up {
            self.level = new_level;
            self.drop_interval_ms = drop_interval_ms(new_level);
        }

        Some((summary, level_up))
    }
}

impl Default for ScoreState {
    fn default() -> Self {
        Self::new()
    }
}
