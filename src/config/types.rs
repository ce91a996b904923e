use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Application state kept in `config.json`.
///
/// Only `last_note_id` is interpreted; any other keys found in the file are
/// carried through unchanged on the next write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// The note that was open when the previous session ended
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_note_id: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}
