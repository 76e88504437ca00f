use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Longest accepted initials
pub const MAX_INITIALS: usize = 3;

/// One finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub initials: String,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    /// Local date, `YYYY-MM-DD`
    pub date: String,
}

impl HighScoreEntry {
    /// Build an entry, normalizing `initials`.
    ///
    /// Returns `None` when the initials are blank.
    pub fn new(initials: &str, score: u32, lines: u32, level: u32, date: NaiveDate) -> Option<Self> {
        Some(Self {
            initials: normalize_initials(initials)?,
            score,
            lines,
            level,
            date: date.format("%Y-%m-%d").to_string(),
        })
    }
}

/// Trim, uppercase and cut to three characters; `None` if nothing is left.
///
/// ```
/// use retro_tetris_records::normalize_initials;
///
/// assert_eq!(normalize_initials(" abcd "), Some("ABC".to_string()));
/// assert_eq!(normalize_initials("   "), None);
/// ```
pub fn normalize_initials(raw: &str) -> Option<String> {
    let initials: String = raw
        .trim()
        .chars()
        .flat_map(char::to_uppercase)
        .take(MAX_INITIALS)
        .collect();
    if initials.is_empty() {
        None
    } else {
        Some(initials)
    }
}

/// Today's local date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
    }

    #[test]
    fn test_entry_formats_date() {
        let e = HighScoreEntry::new("ace", 1200, 4, 1, date()).unwrap();
        assert_eq!(e.initials, "ACE");
        assert_eq!(e.date, "2025-01-31");
    }

    #[test]
    fn test_blank_initials_are_rejected() {
        assert!(HighScoreEntry::new("", 10, 0, 1, date()).is_none());
        assert!(HighScoreEntry::new(" \t", 10, 0, 1, date()).is_none());
    }

    #[test]
    fn test_initials_are_cut_to_three() {
        assert_eq!(normalize_initials("z"), Some("Z".to_string()));
        assert_eq!(normalize_initials("bobby"), Some("BOB".to_string()));
    }

    #[test]
    fn test_entry_json_field_names() {
        let e = HighScoreEntry::new("AAA", 40, 1, 1, date()).unwrap();
        let v = serde_json::to_value(&e).unwrap();
        assert_eq!(v["initials"], "AAA");
        assert_eq!(v["score"], 40);
        assert_eq!(v["lines"], 1);
        assert_eq!(v["level"], 1);
        assert_eq!(v["date"], "2025-01-31");
    }
}
