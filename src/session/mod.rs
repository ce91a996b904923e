//! Editing session: the open note, its buffer, and the timers that save it.

mod controller;
mod debounce;
mod runner;
mod status;

pub use controller::{startup_note_id, SaveOutcome, Session};
pub use debounce::{wait_for, Debouncer};
pub use runner::{run_session, SessionEvent};
pub use status::{auto_saved_text, save_failed_text, NOTE_DELETED};
