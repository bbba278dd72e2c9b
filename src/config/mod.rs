//! Configuration management for the swansong application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults.
//!
//! # Environment Variables
//!
//! - `SWANSONG_DIR`: Path to the data directory holding `logbook.json` (defaults to ~/.swansong)
//! - `HOME`: Used for expanding the default data directory path

use crate::constants::{
    DEFAULT_DATA_SUBDIR, DEFAULT_EXPORT_FILE_NAME, ENV_VAR_HOME, ENV_VAR_SWANSONG_DIR,
    LOGBOOK_FILE_NAME,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the swansong application.
///
/// # Examples
///
/// ```
/// use swansong::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/path/to/data"),
/// };
/// assert_eq!(config.logbook_path(), PathBuf::from("/path/to/data/logbook.json"));
/// ```
pub struct Config {
    /// Directory holding the logbook file and, by default, exports.
    pub data_dir: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &"[REDACTED_PATH]")
            .finish()
    }
}

impl Config {
    /// Loads configuration from the environment, letting `data_dir_override`
    /// (the `--data-dir` flag) take precedence over `SWANSONG_DIR`.
    ///
    /// The path is expanded with `shellexpand`, so `~` and `$VAR` references work.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if path expansion fails or the resulting path is empty.
    pub fn load(data_dir_override: Option<&str>) -> AppResult<Self> {
        let data_dir_str = match data_dir_override {
            Some(dir) => dir.to_string(),
            None => env::var(ENV_VAR_SWANSONG_DIR).unwrap_or_else(|_| {
                let home = env::var(ENV_VAR_HOME).unwrap_or_default();
                format!("{}/{}", home, DEFAULT_DATA_SUBDIR)
            }),
        };

        let expanded_path = shellexpand::full(&data_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;

        let data_dir = PathBuf::from(expanded_path.into_owned());

        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        Ok(Config { data_dir })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when the data directory is empty or relative.
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(format!(
                "Data directory must be an absolute path, got {}",
                self.data_dir.display()
            )));
        }

        Ok(())
    }

    /// Path of the logbook document.
    pub fn logbook_path(&self) -> PathBuf {
        self.data_dir.join(LOGBOOK_FILE_NAME)
    }

    /// Destination used by `export` when no `--output` is given.
    pub fn default_export_path(&self) -> PathBuf {
        self.data_dir.join(DEFAULT_EXPORT_FILE_NAME)
    }
}
