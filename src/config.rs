//! Runtime configuration from environment variables.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_SCORES_PATH: &str = "tetris-high-scores.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// High-score table file
    pub scores_path: PathBuf,
    /// JSONL event log, off when unset
    pub log_path: Option<PathBuf>,
    /// Fixed RNG seed; wall clock when unset
    pub seed: Option<u32>,
    pub muted: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scores_path: PathBuf::from(DEFAULT_SCORES_PATH),
            log_path: None,
            seed: None,
            muted: false,
        }
    }
}

impl AppConfig {
    /// Read `RETRO_TETRIS_*` variables; unset or invalid values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let scores_path = non_empty("RETRO_TETRIS_SCORES_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCORES_PATH));

        let log_path = non_empty("RETRO_TETRIS_LOG_PATH").map(PathBuf::from);

        let seed = non_empty("RETRO_TETRIS_SEED").and_then(|s| s.parse().ok());

        let muted = non_empty("RETRO_TETRIS_MUTE")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            scores_path,
            log_path,
            seed,
            muted,
        }
    }

    /// The configured seed, or one derived from the clock
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            let nanos = chrono::Utc::now().timestamp_subsec_nanos();
            let secs = chrono::Utc::now().timestamp() as u32;
            secs.wrapping_mul(1_000_003) ^ nanos
        })
    }
}
