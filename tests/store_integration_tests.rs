use std::fs;
use tempfile::tempdir;

use swansong::entry::{sort_newest_first, Entry, EntryDraft, EntryStatus};
use swansong::errors::{AppError, AppResult};
use swansong::ops::{self, EntryKey};
use swansong::query::{filter_entries, summarize_moods, EntryFilter};
use swansong::store::EntryStore;

fn seed_entry(title: &str, mood: &str, tags: &str, remind: Option<&str>, timestamp: &str) -> Entry {
    Entry::build(
        EntryDraft {
            title: title.to_string(),
            body: format!("{} notes after hours.", title),
            mood: mood.to_string(),
            tags: tags.to_string(),
            remind: remind.map(str::to_string),
        },
        timestamp,
    )
    .expect("seed entry should be valid")
}

fn seeded() -> Vec<Entry> {
    vec![
        seed_entry("Cache sketch", "curious", "cache,api", Some("2023-04-20"), "2023-04-13T09:00:00.000000"),
        seed_entry("Nightly graphs", "bright", "charts,ai", Some("2023-05-02"), "2023-04-17T09:00:00.000000"),
        seed_entry("Quiet proof", "tired", "proof,math", None, "2023-04-19T09:00:00.000000"),
    ]
}

#[test]
fn test_save_load_round_trip_resorts() -> AppResult<()> {
    let dir = tempdir()?;
    let store = EntryStore::new(dir.path().join("logbook.json"));
    let entries = seeded();

    store.save(&entries)?;
    let loaded = store.load()?;

    let mut expected = entries.clone();
    sort_newest_first(&mut expected);
    assert_eq!(loaded, expected);
    Ok(())
}

#[test]
fn test_loads_legacy_logbook_without_ids() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("logbook.json");
    fs::write(
        &path,
        r#"[
  {
    "title": "Cache sketch",
    "body": "Cache sketch notes after hours.",
    "mood": "curious",
    "timestamp": "2023-04-13T09:00:00.000000",
    "tags": ["cache", "api"],
    "reminder": "2023-04-20"
  },
  {
    "title": "Checkpoint",
    "body": "Need to rewire the cache",
    "mood": "thrilled",
    "timestamp": "2023-03-23T05:00:00",
    "tags": ["cache"],
    "reminder": null,
    "status": "done"
  }
]"#,
    )?;
    let store = EntryStore::new(&path);

    let loaded = store.load()?;
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].title, "Cache sketch");
    assert_eq!(loaded[1].status, Some(EntryStatus::Done));

    // Ids assigned on load are persisted by the next mutation.
    assert!(ops::complete_entry(&store, &EntryKey::Timestamp("2023-04-13T09:00:00.000000".to_string()))?);
    let first_ids: Vec<_> = store.load()?.iter().map(|e| e.id).collect();
    let second_ids: Vec<_> = store.load()?.iter().map(|e| e.id).collect();
    assert_eq!(first_ids, second_ids);
    Ok(())
}

#[test]
fn test_filter_and_summaries_over_stored_entries() -> AppResult<()> {
    let dir = tempdir()?;
    let store = EntryStore::new(dir.path().join("logbook.json"));
    for entry in seeded() {
        store.append(entry)?;
    }

    let entries = store.load()?;
    let filter = EntryFilter::default().parse_range(Some("2023-04-14"), None)?;
    let recent = filter_entries(&entries, &filter)?;
    let titles: Vec<&str> = recent.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Quiet proof", "Nightly graphs"]);

    let moods = summarize_moods(&entries);
    assert_eq!(moods.values().sum::<usize>(), 3);
    Ok(())
}

#[test]
fn test_export_snapshot_matches_store() -> AppResult<()> {
    let dir = tempdir()?;
    let store = EntryStore::new(dir.path().join("logbook.json"));
    store.save(&seeded())?;
    let target = dir.path().join("exports").join("snapshot.json");

    let entries = store.load()?;
    let written = ops::export_entries(&entries, &target)?;

    assert_eq!(written, target);
    let exported: Vec<Entry> = serde_json::from_str(&fs::read_to_string(&target)?)
        .map_err(|e| AppError::Io(e.into()))?;
    assert_eq!(exported, entries);
    Ok(())
}
