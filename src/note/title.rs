//! Titles are never stored independently of the content: a note's title is
//! the first line of its trimmed content, capped at a character budget.

use super::NoteError;

/// Title of a freshly created, still empty note.
pub const NEW_NOTE_TITLE: &str = "New Note";

/// Fallback title when the first line is blank.
pub const UNTITLED: &str = "Untitled";

/// Default cap on title length, counted in characters.
pub const TITLE_MAX_CHARS: usize = 50;

/// Derive a title from note content.
#[must_use]
pub fn derive_title(content: &str, max_chars: usize) -> String {
    let first_line = content.trim().split('\n').next().unwrap_or_default();
    let title: String = first_line.chars().take(max_chars).collect();
    if title.trim().is_empty() {
        UNTITLED.to_string()
    } else {
        title
    }
}

/// Replace the first line of `content` with `first_line`, keeping the rest.
#[must_use]
pub fn replace_first_line(content: &str, first_line: &str) -> String {
    content.split_once('\n').map_or_else(
        || first_line.to_string(),
        |(_, rest)| format!("{first_line}\n{rest}"),
    )
}

/// Check a title supplied by the user for a rename.
pub fn validate_title(title: &str) -> Result<&str, NoteError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(NoteError::invalid_title("title cannot be empty"));
    }
    if trimmed.contains('\n') {
        return Err(NoteError::invalid_title("title must be a single line"));
    }
    Ok(trimmed)
}
