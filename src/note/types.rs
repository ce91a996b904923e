use super::title::{NEW_NOTE_TITLE, UNTITLED};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

fn default_title() -> String {
    UNTITLED.to_string()
}

/// A single note as stored in `notes.json`.
///
/// Field names and the timestamp layout (`2024-01-05T10:11:12.345678`, local
/// time without offset) match documents written by earlier releases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub created: NaiveDateTime,
    pub modified: NaiveDateTime,
}

impl Note {
    /// A blank note created at `now`.
    #[must_use]
    pub fn blank(now: NaiveDateTime) -> Self {
        Self {
            title: NEW_NOTE_TITLE.to_string(),
            content: String::new(),
            created: now,
            modified: now,
        }
    }
}
