//! In-memory note collection keyed by note id.
mod storage;

pub use storage::{load_notes, load_notes_or_recover, save_notes};

use crate::note::{
    derive_title, generate_note_id, replace_first_line, validate_title, Note, NoteError,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// The whole notes document: note id -> note.
///
/// Serializes transparently as the JSON object stored in `notes.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteStore {
    notes: BTreeMap<String, Note>,
}

/// Newest first; equal timestamps fall back to the larger id.
fn newest_first(a: (&str, &Note), b: (&str, &Note)) -> Ordering {
    b.1.modified.cmp(&a.1.modified).then_with(|| b.0.cmp(a.0))
}

impl NoteStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.notes.contains_key(id)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.get(id)
    }

    /// All notes in id order.
    pub fn notes(&self) -> impl Iterator<Item = (&str, &Note)> + '_ {
        self.notes.iter().map(|(id, note)| (id.as_str(), note))
    }

    /// Insert or replace a note under an explicit id.
    pub fn insert<S: Into<String>>(&mut self, id: S, note: Note) {
        self.notes.insert(id.into(), note);
    }

    /// Create a blank "New Note" stamped `now` and return its id.
    pub fn create(&mut self, now: NaiveDateTime) -> String {
        let id = generate_note_id(now, |candidate| self.notes.contains_key(candidate));
        self.notes.insert(id.clone(), Note::blank(now));
        id
    }

    /// Store new content for a note, re-deriving its title.
    ///
    /// Content is trimmed before it is stored. Returns `false` (and leaves
    /// `modified` alone) when neither content nor title would change.
    pub fn apply_content(
        &mut self,
        id: &str,
        content: &str,
        now: NaiveDateTime,
        max_title_chars: usize,
    ) -> Result<bool, NoteError> {
        let note = self.notes.get_mut(id).ok_or_else(|| NoteError::not_found(id))?;
        let trimmed = content.trim();
        let title = derive_title(trimmed, max_title_chars);
        if note.content == trimmed && note.title == title {
            return Ok(false);
        }
        note.content = trimmed.to_string();
        note.title = title;
        note.modified = now;
        Ok(true)
    }

    /// Rename a note by rewriting the first line of its content.
    pub fn rename(
        &mut self,
        id: &str,
        title: &str,
        now: NaiveDateTime,
        max_title_chars: usize,
    ) -> Result<(), NoteError> {
        let new_title = validate_title(title)?;
        let note = self.notes.get_mut(id).ok_or_else(|| NoteError::not_found(id))?;
        let content = replace_first_line(&note.content, new_title);
        note.title = derive_title(&content, max_title_chars);
        note.content = content;
        note.modified = now;
        Ok(())
    }

    /// Remove a note, returning it.
    pub fn remove(&mut self, id: &str) -> Result<Note, NoteError> {
        self.notes.remove(id).ok_or_else(|| NoteError::not_found(id))
    }

    /// Id of the most recently modified note.
    #[must_use]
    pub fn most_recent(&self) -> Option<&str> {
        self.notes()
            .min_by(|a, b| newest_first(*a, *b))
            .map(|(id, _)| id)
    }

    /// All notes, most recently modified first.
    #[must_use]
    pub fn sorted_by_modified(&self) -> Vec<(&str, &Note)> {
        let mut entries: Vec<(&str, &Note)> = self.notes().collect();
        entries.sort_by(|a, b| newest_first(*a, *b));
        entries
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
