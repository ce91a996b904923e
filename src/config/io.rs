use super::types::AppConfig;
use super::ConfigError;
use crate::utils::atomic_write;
use std::path::Path;
use tokio::fs;
use tracing::{debug, warn};

/// Read `config.json`.
///
/// The file only remembers UI state, so a missing or unreadable file is not
/// an error: it yields the default config.
pub async fn read_config(path: &Path) -> AppConfig {
    if !path.exists() {
        debug!("No config at {}; using defaults", path.display());
        return AppConfig::default();
    }
    try_read_config(path).await.unwrap_or_else(|e| {
        warn!("Ignoring unreadable config {}: {e}", path.display());
        AppConfig::default()
    })
}

async fn try_read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&content)?)
}

/// Write `config.json` atomically as pretty JSON.
pub async fn write_config(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    let content = serde_json::to_string_pretty(config)?;
    atomic_write(path, &content).await?;
    Ok(())
}
