use super::edit::edit_session;
use super::Command;
use crate::config::read_config;
use crate::export::{export_file_name, ExportFormat, Exporter};
use crate::note::NoteError;
use crate::search::{filter_notes, NoteRow};
use crate::session::{startup_note_id, Session};
use crate::store::{load_notes_or_recover, NoteStore};
use crate::user_config::UserConfig;
use crate::utils::{format_display_path, DataPaths};
use color_eyre::eyre::{bail, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufRead, AsyncReadExt as _};
use tracing::debug;

/// Run one subcommand, writing its output to `out`. `input` is read by
/// `new` (when no content is given) and `edit`.
pub async fn execute<W, R>(
    command: Command,
    paths: &DataPaths,
    settings: UserConfig,
    out: &mut W,
    input: R,
) -> Result<()>
where
    W: Write + Send,
    R: AsyncBufRead + Unpin + Send,
{
    debug!(?command, "Running command");
    match command {
        Command::List { query } => list(paths, query.as_deref().unwrap_or(""), out).await,
        Command::Show { id } => show(paths, id.as_deref(), out).await,
        Command::New { content } => create_note(paths, settings, content, input, out).await,
        Command::Edit { id } => edit_session(paths, settings, id.as_deref(), input, out).await,
        Command::Rename { id, title } => {
            let mut session = Session::open(paths.clone(), settings).await;
            session.rename(&id, &title).await?;
            writeln!(out, "Renamed {id}")?;
            Ok(())
        }
        Command::Delete { id, yes } => delete(paths, settings, &id, yes, out).await,
        Command::Search { query } => {
            let store = load_notes_or_recover(&paths.notes_file).await;
            let rows = filter_notes(&store, &query);
            if rows.is_empty() {
                writeln!(out, "No matching notes")?;
            }
            write_rows(out, &rows, None)
        }
        Command::Export { id, format, out: target } => {
            export(paths, id.as_deref(), format, target, out).await
        }
        Command::Path => {
            writeln!(out, "{}", paths.root.display())?;
            Ok(())
        }
    }
}

async fn list<W: Write + Send>(paths: &DataPaths, query: &str, out: &mut W) -> Result<()> {
    let store = load_notes_or_recover(&paths.notes_file).await;
    let config = read_config(&paths.config_file).await;
    let rows = filter_notes(&store, query);
    if rows.is_empty() {
        writeln!(out, "No notes")?;
        return Ok(());
    }
    write_rows(out, &rows, startup_note_id(&store, &config))
}

fn write_rows<W: Write>(out: &mut W, rows: &[NoteRow], current: Option<&str>) -> Result<()> {
    for row in rows {
        let marker = if current == Some(row.id.as_str()) { '*' } else { ' ' };
        writeln!(out, "{marker} {}  {}", row.id, row.title)?;
    }
    Ok(())
}

async fn show<W: Write + Send>(paths: &DataPaths, id: Option<&str>, out: &mut W) -> Result<()> {
    let store = load_notes_or_recover(&paths.notes_file).await;
    let config = read_config(&paths.config_file).await;
    let Some(shown) = id.or_else(|| startup_note_id(&store, &config)) else {
        writeln!(out, "No notes")?;
        return Ok(());
    };
    let note = store.get(shown).ok_or_else(|| NoteError::not_found(shown))?;
    writeln!(out, "{}", note.content)?;
    Ok(())
}

async fn create_note<W, R>(
    paths: &DataPaths,
    settings: UserConfig,
    content: Option<String>,
    mut input: R,
    out: &mut W,
) -> Result<()>
where
    W: Write + Send,
    R: AsyncBufRead + Unpin + Send,
{
    let text = match content {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            input.read_to_string(&mut buf).await?;
            buf
        }
    };
    if text.trim().is_empty() {
        writeln!(out, "Nothing to save; no note created")?;
        return Ok(());
    }

    let mut session = Session::open(paths.clone(), settings).await;
    let id = session.new_note().await;
    session.edit(&text);
    session.save_current().await?;
    writeln!(out, "{id}")?;
    Ok(())
}

async fn delete<W: Write + Send>(
    paths: &DataPaths,
    settings: UserConfig,
    id: &str,
    confirmed: bool,
    out: &mut W,
) -> Result<()> {
    let mut session = Session::open(paths.clone(), settings).await;
    if !session.store().contains(id) {
        return Err(NoteError::not_found(id).into());
    }
    if !confirmed {
        bail!("Refusing to delete {id} without --yes");
    }
    session.delete(id).await?;
    writeln!(out, "Deleted {id}")?;
    Ok(())
}

async fn export<W: Write + Send>(
    paths: &DataPaths,
    id: Option<&str>,
    format: ExportFormat,
    target: Option<PathBuf>,
    out: &mut W,
) -> Result<()> {
    let store = load_notes_or_recover(&paths.notes_file).await;
    let exporter = Exporter::load(&paths.templates_dir).await?;

    let written = match id {
        Some(note_id) => {
            let path = match target {
                Some(path) => path,
                None => PathBuf::from(default_file_name(&store, note_id, format)?),
            };
            exporter.export_note(&store, note_id, format, &path).await?;
            vec![path]
        }
        None => {
            let dir = target.unwrap_or_else(|| PathBuf::from("."));
            exporter.export_all(&store, format, &dir).await?
        }
    };

    if written.is_empty() {
        writeln!(out, "No notes to export")?;
    }
    for path in &written {
        writeln!(out, "{}", display(path))?;
    }
    Ok(())
}

fn default_file_name(store: &NoteStore, id: &str, format: ExportFormat) -> Result<String> {
    let note = store.get(id).ok_or_else(|| NoteError::not_found(id))?;
    Ok(export_file_name(id, &note.title, format))
}

fn display(path: &Path) -> String {
    format_display_path(&path.to_string_lossy())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
