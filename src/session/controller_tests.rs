use super::*;
use crate::note::{derive_title, TITLE_MAX_CHARS};
use crate::store::load_notes;
use chrono::{NaiveDate, NaiveDateTime};
use tempfile::TempDir;

fn at(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

fn note(content: &str, modified: NaiveDateTime) -> Note {
    Note {
        title: derive_title(content, TITLE_MAX_CHARS),
        content: content.to_string(),
        created: modified,
        modified,
    }
}

/// Two notes: "older" from March 1st and "newer" from March 2nd.
fn seeded_store() -> NoteStore {
    let mut store = NoteStore::new();
    store.insert("older", note("Older note\nfirst", at(1)));
    store.insert("newer", note("Newer note\nsecond", at(2)));
    store
}

async fn session_with(temp: &TempDir, store: NoteStore, config: AppConfig) -> Session {
    Session::with_state(
        DataPaths::new(temp.path()),
        UserConfig::default(),
        store,
        config,
    )
    .await
}

#[tokio::test]
async fn test_open_empty_dir_starts_blank_note() {
    let temp = TempDir::new().unwrap();
    let session = Session::open(DataPaths::new(temp.path()), UserConfig::default()).await;

    let note = session.current_note().unwrap();
    assert_eq!(note.title, "New Note");
    assert_eq!(session.buffer(), "");
    assert_eq!(session.status(), "0 words");
    assert!(!temp.path().join("notes.json").exists());

    let config = read_config(&temp.path().join("config.json")).await;
    assert_eq!(config.last_note_id.as_deref(), session.current_note_id());
}

#[tokio::test]
async fn test_startup_reopens_last_note() {
    let temp = TempDir::new().unwrap();
    let config = AppConfig {
        last_note_id: Some("older".to_string()),
        ..AppConfig::default()
    };
    let session = session_with(&temp, seeded_store(), config).await;

    assert_eq!(session.current_note_id(), Some("older"));
    assert_eq!(session.buffer(), "Older note\nfirst");
}

#[tokio::test]
async fn test_startup_falls_back_to_most_recent() {
    let temp = TempDir::new().unwrap();
    let config = AppConfig {
        last_note_id: Some("gone".to_string()),
        ..AppConfig::default()
    };
    let session = session_with(&temp, seeded_store(), config).await;

    assert_eq!(session.current_note_id(), Some("newer"));
}

#[tokio::test]
async fn test_open_reads_files_from_disk() {
    let temp = TempDir::new().unwrap();
    let paths = DataPaths::new(temp.path());
    save_notes(&paths.notes_file, &seeded_store()).await.unwrap();
    let config = AppConfig {
        last_note_id: Some("older".to_string()),
        ..AppConfig::default()
    };
    write_config(&paths.config_file, &config).await.unwrap();

    let session = Session::open(paths, UserConfig::default()).await;

    assert_eq!(session.store().len(), 2);
    assert_eq!(session.current_note_id(), Some("older"));
}

#[tokio::test]
async fn test_open_recovers_from_corrupt_notes_file() {
    let temp = TempDir::new().unwrap();
    let paths = DataPaths::new(temp.path());
    std::fs::write(&paths.notes_file, "[1, 2").unwrap();

    let session = Session::open(paths, UserConfig::default()).await;

    assert_eq!(session.store().len(), 1);
    assert_eq!(session.current_note().unwrap().title, "New Note");
    assert!(!temp.path().join("notes.json").exists());
}

#[tokio::test]
async fn test_save_current_writes_title_and_content() {
    let temp = TempDir::new().unwrap();
    let mut session = session_with(&temp, NoteStore::new(), AppConfig::default()).await;
    let id = session.current_note_id().unwrap().to_string();

    assert!(session.edit("  Groceries\nmilk\neggs\n\n"));
    assert!(session.is_modified());
    let outcome = session.save_current().await.unwrap();

    assert_eq!(outcome, SaveOutcome::Saved);
    assert!(!session.is_modified());
    let stored = load_notes(&temp.path().join("notes.json")).await.unwrap();
    let saved = stored.get(&id).unwrap();
    assert_eq!(saved.title, "Groceries");
    assert_eq!(saved.content, "Groceries\nmilk\neggs");
}

#[tokio::test]
async fn test_save_unchanged_keeps_modified_time() {
    let temp = TempDir::new().unwrap();
    let mut session = session_with(&temp, seeded_store(), AppConfig::default()).await;

    let outcome = session.save_current().await.unwrap();

    assert_eq!(outcome, SaveOutcome::Unchanged);
    assert_eq!(session.current_note().unwrap().modified, at(2));
}

#[tokio::test]
async fn test_blank_buffer_removes_note() {
    let temp = TempDir::new().unwrap();
    let mut session = session_with(&temp, seeded_store(), AppConfig::default()).await;

    session.edit("   \n  ");
    let outcome = session.save_current().await.unwrap();

    assert_eq!(outcome, SaveOutcome::Removed);
    assert!(!session.store().contains("newer"));
    let stored = load_notes(&temp.path().join("notes.json")).await.unwrap();
    assert_eq!(stored.len(), 1);
}

#[tokio::test]
async fn test_typing_after_removal_restores_note() {
    let temp = TempDir::new().unwrap();
    let mut session = session_with(&temp, seeded_store(), AppConfig::default()).await;
    session.edit("");
    session.save_current().await.unwrap();

    session.edit("Back again");
    let outcome = session.save_current().await.unwrap();

    assert_eq!(outcome, SaveOutcome::Saved);
    let restored = session.store().get("newer").unwrap();
    assert_eq!(restored.title, "Back again");
    assert_eq!(restored.created, at(2));
}

#[tokio::test]
async fn test_failed_save_sets_status_and_is_retried() {
    let temp = TempDir::new().unwrap();
    let mut session = session_with(&temp, NoteStore::new(), AppConfig::default()).await;
    let id = session.current_note_id().unwrap().to_string();
    let notes_file = temp.path().join("notes.json");
    std::fs::create_dir(&notes_file).unwrap();

    session.edit("Important\nbody");
    let result = session.save_current().await;

    assert!(matches!(result, Err(NoteError::IoError(_))));
    assert!(session.status().starts_with("Failed to save notes: "));
    assert!(!session.is_modified());

    std::fs::remove_dir(&notes_file).unwrap();
    let outcome = session.save_current().await.unwrap();

    assert_eq!(outcome, SaveOutcome::Saved);
    let stored = load_notes(&notes_file).await.unwrap();
    assert_eq!(stored.get(&id).unwrap().content, "Important\nbody");

    assert_eq!(session.save_current().await.unwrap(), SaveOutcome::Unchanged);
}

#[tokio::test]
async fn test_close_writes_edit_left_by_failed_save() {
    let temp = TempDir::new().unwrap();
    let mut session = session_with(&temp, seeded_store(), AppConfig::default()).await;
    let notes_file = temp.path().join("notes.json");
    std::fs::create_dir(&notes_file).unwrap();
    session.edit("Unsaved words");
    session.save_current().await.unwrap_err();

    std::fs::remove_dir(&notes_file).unwrap();
    let outcome = session.close().await.unwrap();

    assert_eq!(outcome, SaveOutcome::Saved);
    let stored = load_notes(&notes_file).await.unwrap();
    assert_eq!(stored.get("newer").unwrap().content, "Unsaved words");
}

#[tokio::test]
async fn test_failed_removal_is_written_on_next_save() {
    let temp = TempDir::new().unwrap();
    let mut session = session_with(&temp, seeded_store(), AppConfig::default()).await;
    let notes_file = temp.path().join("notes.json");
    std::fs::create_dir(&notes_file).unwrap();
    session.edit("");
    session.save_current().await.unwrap_err();

    std::fs::remove_dir(&notes_file).unwrap();
    let outcome = session.save_current().await.unwrap();

    assert_eq!(outcome, SaveOutcome::Removed);
    let stored = load_notes(&notes_file).await.unwrap();
    assert!(!stored.contains("newer"));
    assert!(stored.contains("older"));
}

#[tokio::test]
async fn test_select_saves_current_first() {
    let temp = TempDir::new().unwrap();
    let mut session = session_with(&temp, seeded_store(), AppConfig::default()).await;

    session.edit("Newer note\nsecond\nthird");
    session.select("older").await.unwrap();

    assert_eq!(session.current_note_id(), Some("older"));
    assert_eq!(session.buffer(), "Older note\nfirst");
    assert_eq!(
        session.store().get("newer").unwrap().content,
        "Newer note\nsecond\nthird"
    );
    assert_eq!(session.config().last_note_id.as_deref(), Some("older"));
}

#[tokio::test]
async fn test_select_unknown_note_is_error() {
    let temp = TempDir::new().unwrap();
    let mut session = session_with(&temp, seeded_store(), AppConfig::default()).await;

    let result = session.select("missing").await;

    assert!(matches!(result, Err(NoteError::NotFound(_))));
    assert_eq!(session.current_note_id(), Some("newer"));
}

#[tokio::test]
async fn test_new_note_drops_blank_previous_note() {
    let temp = TempDir::new().unwrap();
    let mut session = session_with(&temp, NoteStore::new(), AppConfig::default()).await;

    let id = session.new_note().await;

    assert_eq!(session.store().len(), 1);
    assert_eq!(session.current_note_id(), Some(id.as_str()));
    assert_eq!(session.current_note().unwrap().title, "New Note");
}

#[tokio::test]
async fn test_delete_current_opens_most_recent() {
    let temp = TempDir::new().unwrap();
    let mut session = session_with(&temp, seeded_store(), AppConfig::default()).await;

    let deleted = session.delete_current().await.unwrap();

    assert_eq!(deleted.as_deref(), Some("newer"));
    assert_eq!(session.current_note_id(), Some("older"));
    assert_eq!(session.status(), NOTE_DELETED);
    let stored = load_notes(&temp.path().join("notes.json")).await.unwrap();
    assert!(!stored.contains("newer"));
}

#[tokio::test]
async fn test_delete_last_note_opens_blank_note() {
    let temp = TempDir::new().unwrap();
    let mut store = NoteStore::new();
    store.insert("only", note("Only note", at(3)));
    let mut session = session_with(&temp, store, AppConfig::default()).await;

    session.delete("only").await.unwrap();

    let current = session.current_note().unwrap();
    assert_eq!(current.title, "New Note");
    assert_eq!(session.store().len(), 1);
}

#[tokio::test]
async fn test_rename_current_rewrites_buffer() {
    let temp = TempDir::new().unwrap();
    let mut session = session_with(&temp, seeded_store(), AppConfig::default()).await;
    session.edit("Newer note\nsecond\nunsaved line");

    session.rename_current("Renamed").await.unwrap();

    assert_eq!(session.buffer(), "Renamed\nsecond\nunsaved line");
    assert!(!session.is_modified());
    assert_eq!(session.store().get("newer").unwrap().title, "Renamed");
}

#[tokio::test]
async fn test_rename_other_note_leaves_buffer() {
    let temp = TempDir::new().unwrap();
    let mut session = session_with(&temp, seeded_store(), AppConfig::default()).await;

    session.rename("older", "Archive").await.unwrap();

    assert_eq!(session.buffer(), "Newer note\nsecond");
    assert_eq!(session.store().get("older").unwrap().content, "Archive\nfirst");
}

#[tokio::test]
async fn test_rename_rejects_empty_title() {
    let temp = TempDir::new().unwrap();
    let mut session = session_with(&temp, seeded_store(), AppConfig::default()).await;

    let result = session.rename("older", "   ").await;

    assert!(matches!(result, Err(NoteError::InvalidTitle(_))));
}

#[tokio::test]
async fn test_auto_save_sets_status() {
    let temp = TempDir::new().unwrap();
    let mut session = session_with(&temp, seeded_store(), AppConfig::default()).await;
    session.edit("hello world");

    let outcome = session.auto_save().await.unwrap();

    assert_eq!(outcome, SaveOutcome::Saved);
    assert_eq!(
        session.status(),
        "Auto-saved  \u{b7}  2 words  \u{b7}  11 chars"
    );
    session.refresh_status();
    assert_eq!(session.status(), "2 words  \u{b7}  11 chars");
}

#[tokio::test]
async fn test_append_line_marks_modified() {
    let temp = TempDir::new().unwrap();
    let mut session = session_with(&temp, NoteStore::new(), AppConfig::default()).await;

    session.append_line("first");
    session.append_line("second");

    assert_eq!(session.buffer(), "first\nsecond\n");
    assert!(session.is_modified());
}

#[tokio::test]
async fn test_listing_marks_current_note() {
    let temp = TempDir::new().unwrap();
    let session = session_with(&temp, seeded_store(), AppConfig::default()).await;

    let listing = session.listing("");
    assert_eq!(listing.rows.len(), 2);
    assert_eq!(listing.selected, Some(0));

    let filtered = session.listing("first");
    assert_eq!(filtered.rows.len(), 1);
    assert_eq!(filtered.selected, None);
}

#[tokio::test]
async fn test_close_saves_pending_edit() {
    let temp = TempDir::new().unwrap();
    let mut session = session_with(&temp, seeded_store(), AppConfig::default()).await;
    session.edit("Closing words");

    let outcome = session.close().await.unwrap();

    assert_eq!(outcome, SaveOutcome::Saved);
    let stored = load_notes(&temp.path().join("notes.json")).await.unwrap();
    assert_eq!(stored.get("newer").unwrap().content, "Closing words");
}

#[tokio::test]
async fn test_append_line_starts_new_line_after_content() {
    let temp = TempDir::new().unwrap();
    let mut session = session_with(&temp, seeded_store(), AppConfig::default()).await;

    session.append_line("third");

    assert_eq!(session.buffer(), "Newer note\nsecond\nthird\n");
}

#[test]
fn test_startup_note_id_prefers_last_open() {
    let store = seeded_store();
    let config = AppConfig {
        last_note_id: Some("older".to_string()),
        ..AppConfig::default()
    };
    assert_eq!(startup_note_id(&store, &config), Some("older"));
    assert_eq!(startup_note_id(&store, &AppConfig::default()), Some("newer"));
    assert_eq!(startup_note_id(&NoteStore::new(), &config), None);
}
