//! Read-only listing commands: `list` and `tags`.

use crate::errors::AppResult;
use crate::query::{filter_entries, summarize_tags, EntryFilter};
use crate::render::{format_entries, format_tag_summary};
use crate::store::EntryStore;
use tracing::debug;

/// Renders the entries matching `filter`, newest first.
pub fn list_entries(store: &EntryStore, filter: &EntryFilter) -> AppResult<String> {
    let entries = store.load()?;
    let matching = filter_entries(&entries, filter)?;
    debug!("{} of {} entries matched", matching.len(), entries.len());
    Ok(format_entries(&matching))
}

/// Renders tag usage counts, optionally capped to the `top` most used tags.
pub fn tag_report(store: &EntryStore, top: Option<usize>) -> AppResult<String> {
    let entries = store.load()?;
    Ok(format_tag_summary(&summarize_tags(&entries, top)))
}
