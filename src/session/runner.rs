//! Event loop driving a [`Session`]: user actions arrive over a channel, the
//! idle timer triggers auto-saves and the status line is published on a
//! watch channel.

use super::controller::Session;
use super::debounce::{wait_for, Debouncer};
use std::ops::ControlFlow;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, warn};

/// Something the user did to the open session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Replace the whole buffer
    Edit(String),
    /// Append one line to the buffer
    AppendLine(String),
    /// Open another note
    Select(String),
    New,
    /// Delete the open note
    Delete,
    /// Rename the open note
    Rename(String),
    Save,
    Close,
}

/// Run the session until [`SessionEvent::Close`] arrives or every sender is
/// dropped. The session is saved before it is handed back.
///
/// Edits arm the auto-save timer; each further edit pushes it back, so the
/// buffer is written once typing pauses for the configured delay. After an
/// auto-save the status line shows "Auto-saved" for the configured hold time
/// and then reverts to the word count.
pub async fn run_session(
    mut session: Session,
    mut events: mpsc::Receiver<SessionEvent>,
    status_tx: watch::Sender<String>,
) -> Session {
    let settings = *session.settings();
    let mut autosave = Debouncer::new(settings.autosave.delay);
    let mut status_reset = Debouncer::new(settings.autosave.status_hold);
    info!(
        delay = ?autosave.delay(),
        "Session loop started"
    );
    publish(&status_tx, session.status());

    loop {
        tokio::select! {
            biased;

            received = events.recv() => {
                let Some(event) = received else {
                    debug!("All event senders dropped");
                    close(&mut session).await;
                    break;
                };
                if handle_event(&mut session, event, &mut autosave).await.is_break() {
                    break;
                }
            }

            () = wait_for(autosave.deadline()) => {
                autosave.cancel();
                match session.auto_save().await {
                    Ok(outcome) => {
                        debug!(?outcome, "Auto-save");
                        status_reset.arm();
                    }
                    Err(e) => warn!("Auto-save failed: {e}"),
                }
            }

            () = wait_for(status_reset.deadline()) => {
                status_reset.cancel();
                session.refresh_status();
            }
        }
        publish(&status_tx, session.status());
    }

    publish(&status_tx, session.status());
    session
}

async fn handle_event(
    session: &mut Session,
    event: SessionEvent,
    autosave: &mut Debouncer,
) -> ControlFlow<()> {
    match event {
        SessionEvent::Edit(text) => {
            if session.edit(&text) {
                autosave.arm();
            }
        }
        SessionEvent::AppendLine(line) => {
            session.append_line(&line);
            autosave.arm();
        }
        SessionEvent::Select(id) => match session.select(&id).await {
            Ok(()) => autosave.cancel(),
            Err(e) => warn!("Cannot open note {id}: {e}"),
        },
        SessionEvent::New => {
            autosave.cancel();
            session.new_note().await;
        }
        SessionEvent::Delete => {
            autosave.cancel();
            if let Err(e) = session.delete_current().await {
                error!("Delete failed: {e}");
            }
        }
        SessionEvent::Rename(title) => match session.rename_current(&title).await {
            Ok(()) => autosave.cancel(),
            Err(e) => warn!("Rename failed: {e}"),
        },
        SessionEvent::Save => {
            autosave.cancel();
            if let Err(e) = session.save_current().await {
                error!("Save failed: {e}");
            }
        }
        SessionEvent::Close => {
            autosave.cancel();
            close(session).await;
            return ControlFlow::Break(());
        }
    }
    ControlFlow::Continue(())
}

async fn close(session: &mut Session) {
    if let Err(e) = session.close().await {
        error!("Failed to save on close: {e}");
    }
}

fn publish(status_tx: &watch::Sender<String>, status: &str) {
    let changed = status_tx.send_if_modified(|current| {
        if current.as_str() == status {
            false
        } else {
            status.clone_into(current);
            true
        }
    });
    if changed {
        debug!(status, "Status updated");
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
