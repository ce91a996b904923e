//! Line-oriented editing over stdin, driven through the session event loop.

use crate::session::{run_session, SaveOutcome, Session, SessionEvent};
use crate::user_config::UserConfig;
use crate::utils::DataPaths;
use color_eyre::eyre::{eyre, Result};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt as _};
use tokio::sync::{mpsc, watch};
use tracing::debug;

const SAVE_COMMAND: &str = ":w";
const CLEAR_COMMAND: &str = ":clear";
const QUIT_COMMAND: &str = ":q";

/// Open `id` (or the startup note) and feed it lines from `input` until
/// `:q` or end of input. Typed lines auto-save once input pauses.
pub async fn edit_session<W, R>(
    paths: &DataPaths,
    settings: UserConfig,
    id: Option<&str>,
    input: R,
    out: &mut W,
) -> Result<()>
where
    W: Write + Send,
    R: AsyncBufRead + Unpin + Send,
{
    let mut session = Session::open(paths.clone(), settings).await;
    if let Some(wanted) = id {
        session.select(wanted).await?;
    }
    let note_id = session
        .current_note_id()
        .map(str::to_string)
        .ok_or_else(|| eyre!("No note to edit"))?;
    writeln!(out, "Editing {note_id}  ({})", session.status())?;
    if !session.buffer().is_empty() {
        writeln!(out, "{}", session.buffer())?;
    }

    let (events_tx, events_rx) = mpsc::channel(64);
    let (status_tx, status_rx) = watch::channel(String::new());
    let handle = tokio::spawn(run_session(session, events_rx, status_tx));

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let event = match line.as_str() {
            QUIT_COMMAND => break,
            SAVE_COMMAND => SessionEvent::Save,
            CLEAR_COMMAND => SessionEvent::Edit(String::new()),
            _ => SessionEvent::AppendLine(line),
        };
        if events_tx.send(event).await.is_err() {
            debug!("Session loop ended early");
            break;
        }
    }
    if events_tx.send(SessionEvent::Close).await.is_err() {
        debug!("Session loop already closed");
    }
    drop(events_tx);

    let mut finished = handle.await?;
    let outcome = finished.save_current().await?;
    debug!(?outcome, status = %status_rx.borrow().as_str(), "Edit finished");
    let summary = match outcome {
        SaveOutcome::Removed | SaveOutcome::NotStored => format!("Note {note_id} is empty; not kept"),
        SaveOutcome::NoNote | SaveOutcome::Unchanged | SaveOutcome::Saved => {
            format!("Saved {note_id}  ({})", finished.status())
        }
    };
    writeln!(out, "{summary}")?;
    Ok(())
}
