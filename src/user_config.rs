//! User settings loaded from `settings.toml` in the data folder.
//!
//! The file is optional; if it does not exist all fields fall back to their
//! `Default` values. Durations are written the humantime way (`"1s"`,
//! `"750ms"`).

use crate::note::TITLE_MAX_CHARS;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum UserConfigError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid setting: {0}")]
    Invalid(String),
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// Idle period after the last edit before the note is saved.
pub const DEFAULT_AUTOSAVE_DELAY: Duration = Duration::from_millis(1000);

/// How long "Auto-saved" stays on the status line.
pub const DEFAULT_STATUS_HOLD: Duration = Duration::from_millis(2000);

mod humantime_format {
    use serde::{Deserialize as _, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&humantime::format_duration(*value).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        humantime::parse_duration(&raw).map_err(serde::de::Error::custom)
    }
}

const fn default_delay() -> Duration {
    DEFAULT_AUTOSAVE_DELAY
}

const fn default_status_hold() -> Duration {
    DEFAULT_STATUS_HOLD
}

const fn default_title_max_chars() -> usize {
    TITLE_MAX_CHARS
}

/// `[autosave]` table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AutosaveSettings {
    #[serde(default = "default_delay", with = "humantime_format")]
    pub delay: Duration,
    #[serde(default = "default_status_hold", with = "humantime_format")]
    pub status_hold: Duration,
}

impl Default for AutosaveSettings {
    fn default() -> Self {
        Self {
            delay: DEFAULT_AUTOSAVE_DELAY,
            status_hold: DEFAULT_STATUS_HOLD,
        }
    }
}

/// `[notes]` table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NotesSettings {
    /// Character budget for titles derived from the first line
    #[serde(default = "default_title_max_chars")]
    pub title_max_chars: usize,
}

impl Default for NotesSettings {
    fn default() -> Self {
        Self {
            title_max_chars: TITLE_MAX_CHARS,
        }
    }
}

/// Top-level user settings, deserialized from `settings.toml`.
///
/// All fields are optional at the TOML level; missing fields resolve to their
/// `Default` values.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
    #[serde(default)]
    pub autosave: AutosaveSettings,
    #[serde(default)]
    pub notes: NotesSettings,
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

/// Parse settings from TOML text and validate them.
pub fn parse_user_config(content: &str) -> Result<UserConfig, UserConfigError> {
    let config: UserConfig = toml::from_str(content)?;
    if config.notes.title_max_chars == 0 {
        return Err(UserConfigError::Invalid(
            "notes.title_max_chars must be at least 1".to_string(),
        ));
    }
    Ok(config)
}

/// Load the user settings from `path`.
///
/// Returns `Ok(UserConfig::default())` if the file does not exist so callers
/// never need to handle the "absent file" case specially.
///
/// # Errors
///
/// Returns [`UserConfigError`] if the file exists but cannot be read, parsed
/// or validated.
pub fn load_user_config(path: &Path) -> Result<UserConfig, UserConfigError> {
    if !path.exists() {
        debug!("Settings not found at {}; using defaults", path.display());
        return Ok(UserConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config = parse_user_config(&content)?;
    debug!("Loaded settings from {}", path.display());
    Ok(config)
}

#[cfg(test)]
#[path = "user_config_tests.rs"]
mod tests;
