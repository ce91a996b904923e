//! Exporting notes to text, markdown or JSON files.

mod engine;
mod error;
mod format;

pub use engine::{TemplateEngine, DEFAULT_EXPORT_TEMPLATE, EXPORT_TEMPLATE_FILE};
pub use error::ExportError;
pub use format::ExportFormat;

use crate::note::Note;
use crate::store::NoteStore;
use crate::utils::atomic_write;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// File written by a JSON export of every note.
pub const JSON_EXPORT_FILE: &str = "notes-export.json";

/// A note together with its id, as exported.
#[derive(Debug, Serialize)]
struct NoteRecord<'note> {
    id: &'note str,
    #[serde(flatten)]
    note: &'note Note,
}

#[derive(Debug, Serialize)]
struct Frontmatter<'note> {
    id: &'note str,
    title: &'note str,
    created: NaiveDateTime,
    modified: NaiveDateTime,
}

/// Renders and writes exports.
pub struct Exporter {
    engine: TemplateEngine,
}

impl Exporter {
    #[must_use]
    pub const fn new(engine: TemplateEngine) -> Self {
        Self { engine }
    }

    /// Exporter using the text template from `templates_dir`, if any.
    pub async fn load(templates_dir: &Path) -> Result<Self, ExportError> {
        Ok(Self::new(TemplateEngine::load(templates_dir).await?))
    }

    /// Render one note in `format`.
    pub fn render_note(
        &self,
        id: &str,
        note: &Note,
        format: ExportFormat,
    ) -> Result<String, ExportError> {
        let record = NoteRecord { id, note };
        match format {
            ExportFormat::Text => self.engine.render(&record),
            ExportFormat::Markdown => {
                let frontmatter = Frontmatter {
                    id,
                    title: &note.title,
                    created: note.created,
                    modified: note.modified,
                };
                let yaml = serde_yaml::to_string(&frontmatter)?;
                Ok(format!("---\n{}\n---\n\n{}\n", yaml.trim_end(), note.content))
            }
            ExportFormat::Json => Ok(serde_json::to_string_pretty(&record)?),
        }
    }

    /// Write one note to `out_path`.
    pub async fn export_note(
        &self,
        store: &NoteStore,
        id: &str,
        format: ExportFormat,
        out_path: &Path,
    ) -> Result<(), ExportError> {
        let note = store
            .get(id)
            .ok_or_else(|| ExportError::NotFound(id.to_string()))?;
        let rendered = self.render_note(id, note, format)?;
        write_export(out_path, &rendered).await?;
        info!("Exported note {id} as {format} to {}", out_path.display());
        Ok(())
    }

    /// Write every note into `out_dir`, one file each, or a single
    /// [`JSON_EXPORT_FILE`] for JSON. Returns the written paths.
    pub async fn export_all(
        &self,
        store: &NoteStore,
        format: ExportFormat,
        out_dir: &Path,
    ) -> Result<Vec<PathBuf>, ExportError> {
        if format == ExportFormat::Json {
            let path = out_dir.join(JSON_EXPORT_FILE);
            write_export(&path, &serde_json::to_string_pretty(store)?).await?;
            info!("Exported {} notes to {}", store.len(), path.display());
            return Ok(vec![path]);
        }

        let mut written = Vec::with_capacity(store.len());
        for (id, note) in store.sorted_by_modified() {
            let path = out_dir.join(export_file_name(id, &note.title, format));
            write_export(&path, &self.render_note(id, note, format)?).await?;
            written.push(path);
        }
        info!("Exported {} notes as {format} to {}", written.len(), out_dir.display());
        Ok(written)
    }
}

/// `{id}-{slug}.{ext}`, or `{id}.{ext}` when the title has nothing to slug.
#[must_use]
pub fn export_file_name(id: &str, title: &str, format: ExportFormat) -> String {
    let slug = slug::slugify(title);
    let ext = format.extension();
    if slug.is_empty() {
        format!("{id}.{ext}")
    } else {
        format!("{id}-{slug}.{ext}")
    }
}

async fn write_export(path: &Path, content: &str) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    atomic_write(path, content).await?;
    Ok(())
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
