//! Logbook persistence.
//!
//! The whole entry collection lives in one JSON document. Every mutation is a
//! full load-modify-save cycle guarded by an advisory lock, and every save
//! replaces the document atomically via a temporary file in the same directory.

use crate::constants::LOCK_FILE_SUFFIX;
use crate::entry::{assign_missing_ids, sort_newest_first, Entry, EntryStatus};
use crate::errors::{AppError, AppResult, LockError};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
#[cfg(unix)]
use std::fs::Permissions;
use std::io::Write;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Handle on the logbook file.
///
/// The store holds no entries itself; each call reads the file afresh so that
/// the document on disk is the single source of truth.
#[derive(Debug, Clone)]
pub struct EntryStore {
    path: PathBuf,
}

/// Exclusive advisory lock on the logbook, released on drop.
#[derive(Debug)]
struct StoreLock {
    file: File,
    path: PathBuf,
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            warn!("Failed to release lock {}: {}", self.path.display(), e);
        }
    }
}

impl EntryStore {
    /// Creates a store backed by the given logbook file. Nothing is touched
    /// on disk until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        EntryStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(LOCK_FILE_SUFFIX);
        PathBuf::from(name)
    }

    /// Returns all entries, newest first.
    ///
    /// Creates the data directory and an empty document if they are missing.
    /// Records without an id get a stable one derived from their position in
    /// the file, which the next save writes out.
    ///
    /// # Errors
    ///
    /// - `AppError::StorageCorruption` if the file is not a JSON entry list
    /// - `AppError::Io` for filesystem failures
    pub fn load(&self) -> AppResult<Vec<Entry>> {
        self.ensure_logbook()?;
        let raw = fs::read_to_string(&self.path)?;
        let mut entries: Vec<Entry> =
            serde_json::from_str(&raw).map_err(|source| AppError::StorageCorruption {
                path: self.path.clone(),
                source,
            })?;
        let assigned = assign_missing_ids(&mut entries);
        if assigned > 0 {
            debug!("Derived ids for {} entries without one", assigned);
        }
        sort_newest_first(&mut entries);
        debug!("Loaded {} entries from {}", entries.len(), self.path.display());
        Ok(entries)
    }

    /// Replaces the document with `entries`, pretty printed.
    ///
    /// The data is written to a temporary file next to the logbook and then
    /// renamed over it, so readers never observe a half-written file.
    pub fn save(&self, entries: &[Entry]) -> AppResult<()> {
        let dir = self.data_dir();
        ensure_data_dir(dir)?;

        let json = serde_json::to_string_pretty(entries).map_err(std::io::Error::from)?;

        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(json.as_bytes())?;
        temp.as_file().sync_all()?;
        #[cfg(unix)]
        {
            let permissions = Permissions::from_mode(crate::constants::DEFAULT_FILE_PERMISSIONS);
            temp.as_file().set_permissions(permissions)?;
        }
        temp.persist(&self.path).map_err(|e| AppError::Io(e.error))?;

        debug!("Saved {} entries to {}", entries.len(), self.path.display());
        Ok(())
    }

    /// Adds `entry` to the logbook and returns it.
    pub fn append(&self, entry: Entry) -> AppResult<Entry> {
        let _lock = self.lock()?;
        let mut entries = self.load()?;
        entries.insert(0, entry.clone());
        self.save(&entries)?;
        info!("Recorded entry {}", entry.timestamp);
        Ok(entry)
    }

    /// Sets the status of the first entry whose timestamp equals `timestamp`.
    ///
    /// Entries are scanned newest first. Returns `false` when nothing matched,
    /// in which case the file is left as it was.
    pub fn set_status(&self, timestamp: &str, status: EntryStatus) -> AppResult<bool> {
        self.update_first(|entry| entry.timestamp == timestamp, status)
    }

    /// Sets the status of the entry with the given id.
    pub fn set_status_by_id(&self, id: Uuid, status: EntryStatus) -> AppResult<bool> {
        self.update_first(|entry| entry.id == id, status)
    }

    fn update_first<F>(&self, matches: F, status: EntryStatus) -> AppResult<bool>
    where
        F: Fn(&Entry) -> bool,
    {
        let _lock = self.lock()?;
        let mut entries = self.load()?;
        let Some(entry) = entries.iter_mut().find(|entry| matches(entry)) else {
            debug!("No entry matched the status update");
            return Ok(false);
        };
        entry.status = Some(status);
        info!("Marked entry {} as {}", entry.timestamp, status);
        self.save(&entries)?;
        Ok(true)
    }

    fn data_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn ensure_logbook(&self) -> AppResult<()> {
        ensure_data_dir(self.data_dir())?;
        if !self.path.exists() {
            info!("Creating empty logbook at {}", self.path.display());
            self.save(&[])?;
        }
        Ok(())
    }

    fn lock(&self) -> AppResult<StoreLock> {
        ensure_data_dir(self.data_dir())?;
        let path = self.lock_path();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|source| LockError::AcquisitionFailed {
                path: path.clone(),
                source,
            })?;

        if let Err(e) = FileExt::try_lock_exclusive(&file) {
            if e.kind() == fs2::lock_contended_error().kind() {
                return Err(LockError::FileBusy { path }.into());
            }
            return Err(LockError::AcquisitionFailed { path, source: e }.into());
        }

        debug!("Acquired lock {}", path.display());
        Ok(StoreLock { file, path })
    }
}

/// Ensures the data directory exists, creating it (owner-only on unix) if needed.
pub fn ensure_data_dir(dir: &Path) -> AppResult<()> {
    if dir.exists() {
        return Ok(());
    }

    fs::create_dir_all(dir).map_err(|e| {
        AppError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to create data directory {}: {}", dir.display(), e),
        ))
    })?;

    #[cfg(unix)]
    {
        let permissions = Permissions::from_mode(crate::constants::DEFAULT_DIR_PERMISSIONS);
        fs::set_permissions(dir, permissions)?;
        debug!("Set 0o700 permissions on data directory");
    }
    Ok(())
}
