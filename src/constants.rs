//! Constants used throughout the application.
//!
//! This module contains all constants used in the SwanSong logbook, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "swansong";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "Personal logbook CLI.";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
/// Log level used when `--verbose` is passed.
pub const VERBOSE_LOG_LEVEL: &str = "debug";
/// Default number of entries shown by `list`.
pub const DEFAULT_LIST_LIMIT: usize = 10;
/// Default reminder lookahead for `remind`, in days.
pub const DEFAULT_REMIND_DAYS: u32 = 30;
/// Default reminder lookahead for `review`, in days.
pub const DEFAULT_REVIEW_REMIND_DAYS: u32 = 14;

// Configuration Keys & Environment Variables
/// Environment variable for specifying the logbook data directory.
pub const ENV_VAR_SWANSONG_DIR: &str = "SWANSONG_DIR";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default data directory, relative to the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".swansong";

// File System Parameters
/// File name of the logbook document inside the data directory.
pub const LOGBOOK_FILE_NAME: &str = "logbook.json";
/// Suffix appended to the logbook path to form its lock file.
pub const LOCK_FILE_SUFFIX: &str = ".lock";
/// Default export file name inside the data directory.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "logbook-export.json";
/// Default POSIX permissions for newly created directories (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;
/// Default POSIX permissions for the logbook file (owner read/write).
#[cfg(unix)]
pub const DEFAULT_FILE_PERMISSIONS: u32 = 0o600;

// Entry Defaults
/// Mood assigned when none is given.
pub const DEFAULT_MOOD: &str = "neutral";
/// Title assigned when the given title is blank.
pub const PLACEHOLDER_TITLE: &str = "untitled";
/// Body assigned when the given body is blank.
pub const PLACEHOLDER_BODY: &str = "no details";
/// Status label of a completed entry.
pub const STATUS_DONE: &str = "done";
/// Status label of an entry that has not been completed.
pub const STATUS_OPEN: &str = "open";

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Human readable form of [`DATE_FORMAT_ISO`] used in error messages.
pub const DATE_FORMAT_HINT: &str = "YYYY-MM-DD";
/// Format of entry timestamps (UTC, microsecond precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
/// Length of the date prefix of an entry timestamp.
pub const TIMESTAMP_DATE_LEN: usize = 10;

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "swansong";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
