// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
// Suppress clippy warnings about unknown/renamed dylint lint names
#![allow(unknown_lints, renamed_and_removed_lints, max_lines_per_file)]
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing,
        clippy::use_debug,
        clippy::too_many_lines
    )
)]

pub mod cli;
pub mod config;
pub mod export;
pub mod logging;
pub mod note;
pub mod search;
pub mod session;
pub mod store;
pub mod user_config;
pub mod utils;

// Re-export commonly used types
pub use config::{AppConfig, ConfigError};
pub use export::{ExportError, ExportFormat, Exporter};
pub use note::{Note, NoteError};
pub use search::{filter_notes, NoteListing, NoteRow};
pub use session::{run_session, SaveOutcome, Session, SessionEvent};
pub use store::NoteStore;
pub use user_config::{load_user_config, UserConfig, UserConfigError};
pub use utils::{DataPaths, PathError};
