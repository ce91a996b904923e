use super::NoteStore;
use crate::note::{Note, NoteError, ID_FORMAT};
use crate::utils::{atomic_write, now_local};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, error, info, warn};

/// Read the notes document. An absent file is an empty store.
pub async fn load_notes(path: &Path) -> Result<NoteStore, NoteError> {
    if !path.exists() {
        debug!("No notes file at {}; starting empty", path.display());
        return Ok(NoteStore::new());
    }
    let content = fs::read_to_string(path).await?;
    let store: NoteStore = serde_json::from_str(&content)?;
    debug!("Loaded {} notes from {}", store.len(), path.display());
    Ok(store)
}

/// Read the notes document, falling back to an empty store when it is
/// unreadable.
///
/// The unreadable file is moved aside to `notes.json.corrupt-<stamp>` first,
/// so a later save cannot overwrite the only copy of the user's notes.
pub async fn load_notes_or_recover(path: &Path) -> NoteStore {
    match load_notes(path).await {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to load notes: {e}");
            let backup = corrupt_backup_path(path);
            match fs::rename(path, &backup).await {
                Ok(()) => warn!("Moved unreadable notes file to {}", backup.display()),
                Err(rename_err) => warn!(
                    "Could not move unreadable notes file aside ({rename_err}); it may be overwritten"
                ),
            }
            NoteStore::new()
        }
    }
}

/// Write the whole notes document atomically as pretty JSON.
///
/// Notes with blank content exist only in memory (a freshly created note
/// nobody typed into yet) and are left out of the document.
pub async fn save_notes(path: &Path, store: &NoteStore) -> Result<(), NoteError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    let persisted: BTreeMap<&str, &Note> = store
        .notes()
        .filter(|(_, note)| !note.content.trim().is_empty())
        .collect();
    let content = serde_json::to_string_pretty(&persisted)?;
    atomic_write(path, &content).await?;
    info!("Saved {} notes to {}", persisted.len(), path.display());
    Ok(())
}

fn corrupt_backup_path(path: &Path) -> PathBuf {
    let stamp = now_local().format(ID_FORMAT);
    let file_name = path
        .file_name()
        .map_or_else(|| "notes.json".to_string(), |n| n.to_string_lossy().into_owned());
    path.with_file_name(format!("{file_name}.corrupt-{stamp}"))
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod tests;
