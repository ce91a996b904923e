// Suppress clippy warnings about unknown/renamed dylint lint names
#![allow(unknown_lints, renamed_and_removed_lints)]

use clap::Parser as _;
use color_eyre::eyre::Result;
use simple_notes::cli::{execute, Args};
use simple_notes::logging::{init_logging, parse_rotation, LogConfig, LOG_FILENAME};
use simple_notes::user_config::{load_user_config, UserConfig};
use simple_notes::utils::{format_display_path, DataPaths};
use tokio::io::BufReader;
use tracing::{debug, warn, Level};

#[tokio::main]
async fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = Args::parse();

    let paths = match &args.data_dir {
        Some(dir) => DataPaths::new(dir),
        None => DataPaths::resolve()?,
    };
    paths.ensure().await?;

    let log_config = LogConfig {
        log_dir: paths.logs_dir.clone(),
        console_level: if args.verbose { Level::DEBUG } else { Level::WARN },
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        ..LogConfig::default()
    };

    if let Err(e) = init_logging(log_config) {
        let log_file = paths.logs_dir.join(LOG_FILENAME);
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!("Logs: {}", format_display_path(&log_file.to_string_lossy()));
        return Err(e);
    }

    // settings.toml is optional
    let settings = load_user_config(&paths.settings_file).unwrap_or_else(|e| {
        warn!("Failed to load settings, using defaults: {e}");
        UserConfig::default()
    });
    debug!(data_dir = %paths.root.display(), "Starting snotes");

    let mut out = std::io::stdout();
    let input = BufReader::new(tokio::io::stdin());
    execute(args.command, &paths, settings, &mut out, input).await
}
