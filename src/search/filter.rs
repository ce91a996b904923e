//! Linear, case-insensitive substring search over titles and content.

use crate::note::Note;
use crate::store::NoteStore;

/// Hint text an empty search box shows; searching for it means "no filter".
pub const SEARCH_PLACEHOLDER: &str = "Search...";

/// One entry of the note list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRow {
    pub id: String,
    pub title: String,
}

/// The note list as displayed, with the current note highlighted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteListing {
    pub rows: Vec<NoteRow>,
    /// Index of the current note within `rows`, when it is displayed
    pub selected: Option<usize>,
}

/// Lowercase the query; the placeholder text counts as an empty query.
#[must_use]
pub fn normalize_query(query: &str) -> String {
    let lowered = query.to_lowercase();
    if lowered == SEARCH_PLACEHOLDER.to_lowercase() {
        String::new()
    } else {
        lowered
    }
}

/// Whether a note matches an already-normalized query.
#[must_use]
pub fn matches_query(note: &Note, needle: &str) -> bool {
    needle.is_empty()
        || note.title.to_lowercase().contains(needle)
        || note.content.to_lowercase().contains(needle)
}

/// Notes matching `query`, most recently modified first.
#[must_use]
pub fn filter_notes(store: &NoteStore, query: &str) -> Vec<NoteRow> {
    let needle = normalize_query(query);
    store
        .sorted_by_modified()
        .into_iter()
        .filter(|(_, note)| matches_query(note, &needle))
        .map(|(id, note)| NoteRow {
            id: id.to_string(),
            title: note.title.clone(),
        })
        .collect()
}

/// Filter the store and locate `current` among the displayed rows.
#[must_use]
pub fn build_listing(store: &NoteStore, query: &str, current: Option<&str>) -> NoteListing {
    let rows = filter_notes(store, query);
    let selected = current.and_then(|id| rows.iter().position(|row| row.id == id));
    NoteListing { rows, selected }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
