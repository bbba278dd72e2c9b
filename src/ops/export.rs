//! Snapshot entries to an arbitrary JSON file.

use crate::entry::Entry;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Writes `entries` to `destination` as a pretty printed JSON array.
///
/// The parent directory is created if needed and any existing file is
/// overwritten. Entry order is kept as given.
///
/// # Errors
///
/// Returns `AppError::Io` if the directory or file cannot be written.
pub fn export_entries(entries: &[Entry], destination: &Path) -> AppResult<PathBuf> {
    info!("Exporting {} entries to {:?}", entries.len(), destination);

    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to create export directory: {}", e),
                ))
            })?;
        }
    }

    let json = serde_json::to_string_pretty(entries).map_err(std::io::Error::from)?;
    fs::write(destination, json).map_err(|e| {
        AppError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to write export file: {}", e),
        ))
    })?;

    debug!("Export written to {:?}", destination);
    Ok(destination.to_path_buf())
}
