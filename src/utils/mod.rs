mod atomic;
mod words;

pub use atomic::atomic_write;
pub use words::{word_count, word_count_text, STATUS_SEPARATOR};

use chrono::{NaiveDateTime, SubsecRound as _};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The name of the per-user data folder
pub const DATA_FOLDER: &str = ".simple_notes";

/// The notes document inside the data folder
pub const NOTES_FILE: &str = "notes.json";

/// The small state document (last opened note)
pub const CONFIG_FILE: &str = "config.json";

/// Optional user settings
pub const SETTINGS_FILE: &str = "settings.toml";

/// Environment variable overriding the data folder location
pub const HOME_ENV_VAR: &str = "SNOTES_HOME";

#[derive(Error, Debug)]
pub enum PathError {
    #[error("Failed to determine home directory")]
    HomeDirNotFound,

    #[error("Failed to create data directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Get the data folder (`~/.simple_notes`).
///
/// If `SNOTES_HOME` is set, that directory is used instead, which keeps
/// tests and scripted runs away from the user's real notes.
pub fn data_dir() -> Result<PathBuf, PathError> {
    if let Some(custom) = std::env::var_os(HOME_ENV_VAR) {
        return Ok(PathBuf::from(custom));
    }
    dirs::home_dir()
        .map(|home| home.join(DATA_FOLDER))
        .ok_or(PathError::HomeDirNotFound)
}

/// Every file location the application touches, derived from one root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub root: PathBuf,
    pub notes_file: PathBuf,
    pub config_file: PathBuf,
    pub settings_file: PathBuf,
    pub logs_dir: PathBuf,
    pub templates_dir: PathBuf,
}

impl DataPaths {
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            notes_file: root.join(NOTES_FILE),
            config_file: root.join(CONFIG_FILE),
            settings_file: root.join(SETTINGS_FILE),
            logs_dir: root.join("logs"),
            templates_dir: root.join("templates"),
        }
    }

    /// Resolve paths from `SNOTES_HOME` or the home directory.
    pub fn resolve() -> Result<Self, PathError> {
        Ok(Self::new(&data_dir()?))
    }

    /// Create the data folder if it does not exist yet.
    pub async fn ensure(&self) -> Result<(), PathError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|source| PathError::CreateDir {
                path: self.root.display().to_string(),
                source,
            })
    }
}

/// Current local wall-clock time at microsecond resolution, the precision
/// note timestamps are stored with.
#[must_use]
pub fn now_local() -> NaiveDateTime {
    chrono::Local::now().naive_local().trunc_subsecs(6)
}

/// Format a path for display, replacing home directory with ~/
#[must_use]
pub fn format_display_path(path: &str) -> String {
    replace_homedir::replace_homedir(path, "~")
}

#[cfg(test)]
#[path = "utils_tests.rs"]
mod tests;
