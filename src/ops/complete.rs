//! Marking entries as done.

use crate::entry::EntryStatus;
use crate::errors::AppResult;
use crate::store::EntryStore;
use std::fmt;
use tracing::info;
use uuid::Uuid;

/// How the entry to complete is identified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKey {
    /// Timestamp string; the newest entry with this exact timestamp wins.
    Timestamp(String),
    Id(Uuid),
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKey::Timestamp(ts) => write!(f, "{}", ts),
            EntryKey::Id(id) => write!(f, "{}", id),
        }
    }
}

/// Marks the entry identified by `key` as done.
///
/// Returns `false` when no entry matches; that is a normal outcome, not an error.
pub fn complete_entry(store: &EntryStore, key: &EntryKey) -> AppResult<bool> {
    let found = match key {
        EntryKey::Timestamp(ts) => store.set_status(ts, EntryStatus::Done)?,
        EntryKey::Id(id) => store.set_status_by_id(*id, EntryStatus::Done)?,
    };
    if !found {
        info!("No entry found for {}", key);
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Entry, EntryDraft};
    use tempfile::tempdir;

    #[test]
    fn test_complete_entry_by_timestamp_and_id() {
        let dir = tempdir().unwrap();
        let store = EntryStore::new(dir.path().join("logbook.json"));
        let draft = EntryDraft {
            title: "Checkpoint".to_string(),
            ..EntryDraft::default()
        };
        let first = store
            .append(Entry::build(draft.clone(), "2023-03-23T05:00:00").unwrap())
            .unwrap();
        let second = store
            .append(Entry::build(draft, "2023-03-24T05:00:00").unwrap())
            .unwrap();

        let by_ts = EntryKey::Timestamp(first.timestamp.clone());
        assert!(complete_entry(&store, &by_ts).unwrap());
        assert!(complete_entry(&store, &EntryKey::Id(second.id)).unwrap());

        assert!(store.load().unwrap().iter().all(|e| e.is_done()));
    }

    #[test]
    fn test_complete_entry_not_found() {
        let dir = tempdir().unwrap();
        let store = EntryStore::new(dir.path().join("logbook.json"));

        let key = EntryKey::Timestamp("2023-03-23T05:00:00".to_string());
        assert!(!complete_entry(&store, &key).unwrap());
        assert!(!complete_entry(&store, &EntryKey::Id(Uuid::new_v4())).unwrap());
    }
}
