//! Atomic file write operations.
//!
//! Temp files are created next to the target and cleaned up on failure.

use std::io;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write content to a file atomically using a temporary file.
///
/// The temp file lives in the same directory as the target so the final
/// rename never crosses a filesystem. Readers see either the old document
/// or the complete new one.
///
/// # Errors
///
/// Returns an `io::Error` if the parent directory cannot be determined,
/// the temp file cannot be created or written, or the rename fails.
pub async fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no parent directory"))?
        .to_path_buf();
    let target_path = path.to_path_buf();
    let content_owned = content.to_string();

    tokio::task::spawn_blocking(move || -> io::Result<()> {
        use std::io::Write as _;

        let mut temp_file = NamedTempFile::new_in(&parent)?;
        temp_file.write_all(content_owned.as_bytes())?;
        temp_file.flush()?;
        temp_file.persist(&target_path)?;
        Ok(())
    })
    .await
    .map_err(io::Error::other)?
}
