//! Common test utilities

use chrono::{NaiveDate, NaiveDateTime};
use simple_notes::note::{derive_title, Note, TITLE_MAX_CHARS};
use simple_notes::store::{save_notes, NoteStore};
use simple_notes::utils::DataPaths;
use tempfile::TempDir;

/// Create a temporary directory for testing
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Eight in the morning on the given day of March 2024
pub fn march(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day)
        .and_then(|d| d.and_hms_opt(8, 0, 0))
        .expect("valid date")
}

/// Build a note whose title is derived from its content
pub fn note(content: &str, modified: NaiveDateTime) -> Note {
    Note {
        title: derive_title(content, TITLE_MAX_CHARS),
        content: content.to_string(),
        created: modified,
        modified,
    }
}

/// Write `entries` as the notes document of a fresh data folder
pub async fn data_dir_with(temp: &TempDir, entries: &[(&str, &str, u32)]) -> DataPaths {
    let paths = DataPaths::new(temp.path());
    let mut store = NoteStore::new();
    for (id, content, day) in entries {
        store.insert(*id, note(content, march(*day)));
    }
    save_notes(&paths.notes_file, &store)
        .await
        .expect("Failed to seed notes");
    paths
}
