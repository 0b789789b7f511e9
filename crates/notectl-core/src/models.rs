//! Data models for notectl
//!
//! Defines the core data structures: a `Note` as composed at the command
//! line, and a `NoteRecord` as it exists in the database.

use chrono::{DateTime, Datelike, Local};
use serde::{Deserialize, Serialize};

/// Tag applied when the user supplies none
pub const DEFAULT_TAG: &str = "generic";

/// A single timestamped, tagged text entry
///
/// Notes are immutable once saved. The day/month/year accessors expose the
/// date parts that get denormalized into their own columns at save time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Note {
    /// When this note was created
    pub created_at: DateTime<Local>,
    /// The note text (may be empty)
    pub text: String,
    /// Tags for organization; never empty
    pub tags: Vec<String>,
}

impl Note {
    /// Create a new note timestamped now
    ///
    /// An empty tag list is replaced with `["generic"]`.
    pub fn new(text: impl Into<String>, tags: Vec<String>) -> Self {
        Self::at(Local::now(), text, tags)
    }

    /// Create a note with an explicit timestamp (loading from storage, tests)
    pub fn at(created_at: DateTime<Local>, text: impl Into<String>, tags: Vec<String>) -> Self {
        let tags = if tags.is_empty() {
            vec![DEFAULT_TAG.to_string()]
        } else {
            tags
        };
        Self {
            created_at,
            text: text.into(),
            tags,
        }
    }

    /// Day of the month (1-31)
    pub fn day(&self) -> u32 {
        self.created_at.day()
    }

    /// Month (1-12)
    pub fn month(&self) -> u32 {
        self.created_at.month()
    }

    /// Year
    pub fn year(&self) -> i32 {
        self.created_at.year()
    }

    /// Creation time as unix seconds
    pub fn unix_timestamp(&self) -> i64 {
        self.created_at.timestamp()
    }

    /// Tags joined with commas, the form they are stored in
    pub fn tags_joined(&self) -> String {
        self.tags.join(",")
    }

    /// One-line console echo printed when the note is saved
    pub fn summary(&self) -> String {
        format!(
            "{} : Saving note \"{}\", tags: {}",
            self.created_at.to_rfc2822(),
            self.text,
            self.tags_joined()
        )
    }
}

/// A note as persisted, together with its assigned row id
///
/// Ids are assigned by SQLite (AUTOINCREMENT) and are never reused.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NoteRecord {
    /// Row id assigned at insert time
    pub id: i64,
    /// The note itself
    #[serde(flatten)]
    pub note: Note,
}

impl NoteRecord {
    /// One-line listing format used by `notectl show`
    pub fn display_line(&self) -> String {
        format!(
            "{} - {}: {}, tags: {}",
            self.id,
            self.note.created_at.to_rfc2822(),
            self.note.text,
            self.note.tags_joined()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2023, 2, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_default_tag_applied() {
        let note = Note::new("hello", Vec::new());
        assert_eq!(note.tags, vec!["generic".to_string()]);
    }

    #[test]
    fn test_supplied_tags_kept() {
        let note = Note::new("hello", vec!["work".to_string(), "urgent".to_string()]);
        assert_eq!(note.tags_joined(), "work,urgent");
    }

    #[test]
    fn test_empty_text_allowed() {
        let note = Note::new("", Vec::new());
        assert_eq!(note.text, "");
    }

    #[test]
    fn test_date_parts() {
        let note = Note::at(fixed_time(), "n", Vec::new());
        assert_eq!(note.day(), 1);
        assert_eq!(note.month(), 2);
        assert_eq!(note.year(), 2023);
        assert_eq!(note.unix_timestamp(), fixed_time().timestamp());
    }

    #[test]
    fn test_summary_format() {
        let note = Note::at(fixed_time(), "buy milk", vec!["errands".to_string()]);
        let line = note.summary();
        assert!(line.contains(": Saving note \"buy milk\", tags: errands"));
        assert!(line.starts_with(&fixed_time().to_rfc2822()));
    }

    #[test]
    fn test_display_line_format() {
        let record = NoteRecord {
            id: 7,
            note: Note::at(fixed_time(), "buy milk", vec!["errands".to_string()]),
        };
        assert_eq!(
            record.display_line(),
            format!("7 - {}: buy milk, tags: errands", fixed_time().to_rfc2822())
        );
    }
}
