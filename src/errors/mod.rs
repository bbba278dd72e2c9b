//! Error handling utilities for the swansong application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents errors that can occur when attempting to lock the logbook.
///
/// Mutating commands hold an exclusive advisory lock on a sibling lock file
/// for the whole load-modify-save cycle.
///
/// # Examples
///
/// ```
/// use swansong::errors::LockError;
/// use std::path::PathBuf;
///
/// let error = LockError::FileBusy {
///     path: PathBuf::from("/path/to/logbook.json.lock"),
/// };
///
/// assert!(format!("{}", error).contains("another swansong process"));
/// ```
#[derive(Debug, Error)]
pub enum LockError {
    /// Error when the logbook is already locked by another process.
    #[error("Logbook is currently being modified by another swansong process: {path}. Please wait for it to finish and try again.")]
    FileBusy {
        /// The path to the lock file that is held
        path: PathBuf,
    },

    /// Error when acquiring the lock fails for a technical reason.
    #[error("Failed to acquire lock {path}: {source}. Please check file permissions and ensure the data directory is accessible.")]
    AcquisitionFailed {
        /// The path to the lock file that couldn't be locked
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed user input, such as a date that is not `YYYY-MM-DD`.
    #[error("Invalid value {value:?}: expected {expected}")]
    Validation {
        /// The offending input, verbatim
        value: String,
        /// Description of the accepted format
        expected: String,
    },

    /// The logbook file exists but does not hold a valid entry list.
    ///
    /// This is never repaired automatically; the file is left untouched.
    #[error("Logbook file {path} is corrupt: {source}")]
    StorageCorruption {
        /// Path of the unreadable logbook
        path: PathBuf,
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// Errors related to locking the logbook for modification.
    #[error("File locking error: {0}")]
    Lock(#[from] LockError),
}

impl AppError {
    /// Builds a [`AppError::Validation`] for a value that is not a `YYYY-MM-DD` date.
    pub fn invalid_date(value: impl Into<String>) -> Self {
        AppError::Validation {
            value: value.into(),
            expected: format!("a date in {} form", crate::constants::DATE_FORMAT_HINT),
        }
    }
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use swansong::errors::{AppResult, AppError};
///
/// fn might_fail(raw: &str) -> AppResult<String> {
///     if raw.is_empty() {
///         return Err(AppError::invalid_date(raw));
///     }
///     Ok(raw.to_string())
/// }
/// assert!(might_fail("").is_err());
/// ```
pub type AppResult<T> = Result<T, AppError>;
