mod io;
mod types;

pub use io::{read_config, write_config};
pub use types::AppConfig;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
