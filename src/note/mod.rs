//! The note record and the rules that derive its title and identifier.

mod error;
mod id;
mod title;
mod types;

pub use error::NoteError;
pub use id::{generate_note_id, ID_FORMAT};
pub use title::{
    derive_title, replace_first_line, validate_title, NEW_NOTE_TITLE, TITLE_MAX_CHARS, UNTITLED,
};
pub use types::Note;
