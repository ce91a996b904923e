//! The editing session: which note is open, what the editor buffer holds,
//! and when that buffer is written back to the store.

use super::status::{auto_saved_text, save_failed_text, NOTE_DELETED};
use chrono::NaiveDateTime;
use crate::config::{read_config, write_config, AppConfig};
use crate::note::{Note, NoteError};
use crate::search::{build_listing, NoteListing};
use crate::store::{load_notes_or_recover, save_notes, NoteStore};
use crate::user_config::UserConfig;
use crate::utils::{now_local, word_count_text, DataPaths};
use tracing::{debug, error, info, warn};

/// What `save_current` ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// No note is open
    NoNote,
    /// The buffer was blank, so the note was dropped from the store
    Removed,
    /// The buffer was blank and the open note was not in the store
    NotStored,
    /// The buffer matches what is stored
    Unchanged,
    /// The note was updated and the store written
    Saved,
}

/// The note a session opens with: the last open note if it still exists,
/// else the most recently modified one.
#[must_use]
pub fn startup_note_id<'state>(
    store: &'state NoteStore,
    config: &'state AppConfig,
) -> Option<&'state str> {
    config
        .last_note_id
        .as_deref()
        .filter(|id| store.contains(id))
        .or_else(|| store.most_recent())
}

/// Headless editor state over a [`NoteStore`].
#[derive(Debug)]
pub struct Session {
    paths: DataPaths,
    settings: UserConfig,
    store: NoteStore,
    config: AppConfig,
    current_note_id: Option<String>,
    buffer: String,
    modified: bool,
    status: String,
    /// The store holds changes that the last write failed to put on disk
    unpersisted: bool,
    /// Creation time of the open note while it is dropped for being blank
    dropped_created: Option<NaiveDateTime>,
}

impl Session {
    /// Load notes and config from disk and open the startup note.
    pub async fn open(paths: DataPaths, settings: UserConfig) -> Self {
        let store = load_notes_or_recover(&paths.notes_file).await;
        let config = read_config(&paths.config_file).await;
        info!(
            "Opened {} notes from {}",
            store.len(),
            paths.notes_file.display()
        );
        Self::with_state(paths, settings, store, config).await
    }

    /// Build a session from already-loaded state and open the startup note:
    /// the last open note if it still exists, else the most recently
    /// modified one, else a fresh note.
    pub async fn with_state(
        paths: DataPaths,
        settings: UserConfig,
        store: NoteStore,
        config: AppConfig,
    ) -> Self {
        let mut session = Self {
            paths,
            settings,
            store,
            config,
            current_note_id: None,
            buffer: String::new(),
            modified: false,
            status: "Ready".to_string(),
            unpersisted: false,
            dropped_created: None,
        };
        let startup = startup_note_id(&session.store, &session.config).map(str::to_string);
        match startup {
            Some(id) => {
                session.load_note(&id).await;
            }
            None => {
                session.new_note().await;
            }
        }
        session
    }

    #[must_use]
    pub const fn paths(&self) -> &DataPaths {
        &self.paths
    }

    #[must_use]
    pub const fn settings(&self) -> &UserConfig {
        &self.settings
    }

    #[must_use]
    pub const fn store(&self) -> &NoteStore {
        &self.store
    }

    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub fn current_note_id(&self) -> Option<&str> {
        self.current_note_id.as_deref()
    }

    #[must_use]
    pub fn current_note(&self) -> Option<&Note> {
        self.current_note_id
            .as_deref()
            .and_then(|id| self.store.get(id))
    }

    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Whether the buffer has edits not yet written to the store.
    #[must_use]
    pub const fn is_modified(&self) -> bool {
        self.modified
    }

    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// The note list for a search box holding `query`.
    #[must_use]
    pub fn listing(&self, query: &str) -> NoteListing {
        build_listing(&self.store, query, self.current_note_id.as_deref())
    }

    /// Make `id` the open note without saving the previous one.
    ///
    /// Returns `false` when there is no such note.
    pub async fn load_note(&mut self, id: &str) -> bool {
        let Some(note) = self.store.get(id) else {
            return false;
        };
        self.buffer.clone_from(&note.content);
        self.current_note_id = Some(id.to_string());
        self.modified = false;
        self.dropped_created = None;
        self.config.last_note_id = Some(id.to_string());
        self.persist_config().await;
        self.refresh_status();
        debug!("Loaded note {id}");
        true
    }

    /// Switch to another note, saving the open one first.
    pub async fn select(&mut self, id: &str) -> Result<(), NoteError> {
        if self.current_note_id.as_deref() == Some(id) {
            return Ok(());
        }
        if !self.store.contains(id) {
            return Err(NoteError::not_found(id));
        }
        self.flush().await;
        self.load_note(id).await;
        Ok(())
    }

    /// Save the open note, then create and open a blank one.
    pub async fn new_note(&mut self) -> String {
        self.flush().await;
        let id = self.store.create(now_local());
        self.load_note(&id).await;
        info!("Created note {id}");
        id
    }

    /// Replace the whole buffer. Returns whether it changed.
    pub fn edit(&mut self, text: &str) -> bool {
        let changed = self.buffer != text;
        if changed {
            text.clone_into(&mut self.buffer);
            self.modified = true;
        }
        self.refresh_status();
        changed
    }

    /// Append one line of text to the buffer, on a line of its own.
    pub fn append_line(&mut self, line: &str) {
        if !self.buffer.is_empty() && !self.buffer.ends_with('\n') {
            self.buffer.push('\n');
        }
        self.buffer.push_str(line);
        self.buffer.push('\n');
        self.modified = true;
        self.refresh_status();
    }

    /// Write the buffer back to the open note.
    ///
    /// A blank buffer removes the note instead, so empty notes never reach
    /// disk. The modified flag is cleared whatever happens. After a failed
    /// write the next save writes the store again even if nothing changed.
    pub async fn save_current(&mut self) -> Result<SaveOutcome, NoteError> {
        let Some(id) = self.current_note_id.clone() else {
            return Ok(SaveOutcome::NoNote);
        };
        self.modified = false;

        if self.buffer.trim().is_empty() {
            match self.store.remove(&id) {
                Ok(removed) => {
                    self.dropped_created = Some(removed.created);
                    info!("Dropped empty note {id}");
                }
                Err(_) if !self.unpersisted => return Ok(SaveOutcome::NotStored),
                Err(_) => debug!("Retrying failed write after dropping {id}"),
            }
            self.persist_notes().await?;
            return Ok(SaveOutcome::Removed);
        }

        if !self.store.contains(&id) {
            // The note was dropped while blank and has been typed into again.
            let created = self.dropped_created.take().unwrap_or_else(now_local);
            self.store.insert(id.as_str(), Note::blank(created));
            debug!("Restored note {id}");
        }

        let max_chars = self.settings.notes.title_max_chars;
        let changed = self
            .store
            .apply_content(&id, &self.buffer, now_local(), max_chars)?;
        if !changed && !self.unpersisted {
            return Ok(SaveOutcome::Unchanged);
        }
        self.persist_notes().await?;
        Ok(SaveOutcome::Saved)
    }

    /// Save triggered by the idle timer; updates the status line on success.
    pub async fn auto_save(&mut self) -> Result<SaveOutcome, NoteError> {
        let outcome = self.save_current().await?;
        self.status = auto_saved_text(&self.buffer);
        Ok(outcome)
    }

    /// Delete the open note and open the next most recent one (or a blank
    /// note when none remain). Returns the deleted id.
    pub async fn delete_current(&mut self) -> Result<Option<String>, NoteError> {
        let Some(id) = self.current_note_id.clone() else {
            return Ok(None);
        };
        self.modified = false;
        match self.store.remove(&id) {
            Ok(_) => {
                info!("Deleted note {id}");
                self.persist_notes().await?;
            }
            Err(e) => debug!("Delete of unsaved note {id}: {e}"),
        }
        self.current_note_id = None;
        self.dropped_created = None;
        self.buffer.clear();

        let next = self.store.most_recent().map(str::to_string);
        match next {
            Some(next_id) => {
                self.load_note(&next_id).await;
            }
            None => {
                self.new_note().await;
            }
        }
        self.status = NOTE_DELETED.to_string();
        Ok(Some(id))
    }

    /// Open `id` (saving the current note) and delete it.
    pub async fn delete(&mut self, id: &str) -> Result<Option<String>, NoteError> {
        self.select(id).await?;
        self.delete_current().await
    }

    /// Rename a note by rewriting the first line of its content.
    ///
    /// When it is the open note the buffer is saved first and reloaded
    /// afterwards, so no pending edit is lost.
    pub async fn rename(&mut self, id: &str, title: &str) -> Result<(), NoteError> {
        let is_current = self.current_note_id.as_deref() == Some(id);
        if is_current {
            self.save_current().await?;
        }
        let max_chars = self.settings.notes.title_max_chars;
        self.store.rename(id, title, now_local(), max_chars)?;
        self.persist_notes().await?;
        if is_current {
            if let Some(note) = self.store.get(id) {
                self.buffer.clone_from(&note.content);
            }
            self.modified = false;
            self.refresh_status();
        }
        Ok(())
    }

    /// Rename the open note.
    pub async fn rename_current(&mut self, title: &str) -> Result<(), NoteError> {
        let id = self
            .current_note_id
            .clone()
            .ok_or_else(|| NoteError::not_found("no open note"))?;
        self.rename(&id, title).await
    }

    /// Save before shutting down.
    pub async fn close(&mut self) -> Result<SaveOutcome, NoteError> {
        let outcome = self.save_current().await?;
        info!(?outcome, "Session closed");
        Ok(outcome)
    }

    /// Show the word count of the buffer on the status line.
    pub fn refresh_status(&mut self) {
        self.status = word_count_text(&self.buffer);
    }

    /// Save without propagating failures; they are already on the status line.
    async fn flush(&mut self) {
        if let Err(e) = self.save_current().await {
            debug!("Continuing after failed save: {e}");
        }
    }

    async fn persist_notes(&mut self) -> Result<(), NoteError> {
        let result = save_notes(&self.paths.notes_file, &self.store).await;
        self.unpersisted = result.is_err();
        if let Err(e) = &result {
            error!("Failed to save notes: {e}");
            self.status = save_failed_text(e);
        }
        result
    }

    async fn persist_config(&self) {
        if let Err(e) = write_config(&self.paths.config_file, &self.config).await {
            warn!("Failed to save config: {e}");
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
