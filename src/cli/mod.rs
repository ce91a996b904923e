//! Command-line surface of `snotes`.

mod commands;
mod edit;

pub use commands::execute;

use crate::export::ExportFormat;
use crate::utils::HOME_ENV_VAR;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Simple Notes - plain-text notes with auto-save
#[derive(Parser, Debug)]
#[command(name = "snotes", author, version, about, long_about = None)]
pub struct Args {
    /// Data folder; defaults to `~/.simple_notes`
    #[arg(long, env = HOME_ENV_VAR, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Enable JSON log format
    #[arg(long, env = "SNOTES_LOG_JSON", default_value = "false", global = true)]
    pub log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "SNOTES_LOG_ROTATION", default_value = "daily", global = true)]
    pub log_rotation: String,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List notes, most recently modified first
    List {
        /// Only notes whose title or content contains this text
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Print a note (default: the note a session would open)
    Show { id: Option<String> },
    /// Create a note from --content, or from stdin
    New {
        #[arg(short, long)]
        content: Option<String>,
    },
    /// Edit a note line by line from stdin (`:w` save, `:clear` empty, `:q` quit)
    Edit { id: Option<String> },
    /// Replace the first line of a note
    Rename { id: String, title: String },
    /// Delete a note
    Delete {
        id: String,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// Case-insensitive search over titles and content
    Search { query: String },
    /// Export one note, or every note into a folder
    Export {
        id: Option<String>,
        /// text, markdown (md) or json
        #[arg(short, long, default_value = "text", value_parser = parse_format)]
        format: ExportFormat,
        /// Output file (one note) or folder (all notes)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Print the data folder
    Path,
}

fn parse_format(s: &str) -> Result<ExportFormat, String> {
    s.parse::<ExportFormat>().map_err(|e| format!("{e}"))
}
