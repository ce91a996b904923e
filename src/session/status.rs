//! Status line texts.

use crate::utils::{word_count_text, STATUS_SEPARATOR};
use std::fmt::Display;

/// Shown after the current note was deleted.
pub const NOTE_DELETED: &str = "Note deleted";

/// Status right after an automatic save.
#[must_use]
pub fn auto_saved_text(buffer: &str) -> String {
    format!("Auto-saved{STATUS_SEPARATOR}{}", word_count_text(buffer))
}

/// Status after the notes document could not be written.
#[must_use]
pub fn save_failed_text<E: Display>(err: &E) -> String {
    format!("Failed to save notes: {err}")
}
