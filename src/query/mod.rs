//! Filtering and aggregation over an in-memory list of entries.
//!
//! Everything here is pure: callers load entries from the store, hand them in,
//! and get borrowed views or counts back. Input order is preserved, which for
//! entries coming from the store means newest first.

use crate::constants::DEFAULT_MOOD;
use crate::entry::{parse_iso_date, Entry};
use crate::errors::AppResult;
use chrono::{Days, NaiveDate};
use std::collections::HashMap;

/// Criteria for `list`. Every field is optional; `None` disables that axis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    pub mood: Option<String>,
    pub tag: Option<String>,
    /// Inclusive lower bound on the entry date.
    pub since: Option<NaiveDate>,
    /// Inclusive upper bound on the entry date.
    pub until: Option<NaiveDate>,
    pub limit: Option<usize>,
}

impl EntryFilter {
    /// Parses the raw `--since` / `--until` strings.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` naming whichever date is malformed.
    pub fn parse_range(
        mut self,
        since: Option<&str>,
        until: Option<&str>,
    ) -> AppResult<Self> {
        self.since = since.map(parse_iso_date).transpose()?;
        self.until = until.map(parse_iso_date).transpose()?;
        Ok(self)
    }
}

/// Applies mood, tag and date range predicates in that order, then the limit.
///
/// Date comparisons use only the date part of each entry's timestamp.
///
/// # Errors
///
/// Returns `AppError::Validation` if a date bound is set and an entry's
/// timestamp does not begin with a valid date.
pub fn filter_entries<'a>(entries: &'a [Entry], filter: &EntryFilter) -> AppResult<Vec<&'a Entry>> {
    let mut filtered: Vec<&Entry> = entries
        .iter()
        .filter(|e| filter.mood.as_ref().map_or(true, |mood| &e.mood == mood))
        .filter(|e| filter.tag.as_ref().map_or(true, |tag| e.tags.contains(tag)))
        .collect();

    if filter.since.is_some() || filter.until.is_some() {
        let mut in_range = Vec::with_capacity(filtered.len());
        for entry in filtered {
            let date = entry.date()?;
            let after_start = filter.since.map_or(true, |since| date >= since);
            let before_end = filter.until.map_or(true, |until| date <= until);
            if after_start && before_end {
                in_range.push(entry);
            }
        }
        filtered = in_range;
    }

    // A zero limit means no limit.
    if let Some(limit) = filter.limit.filter(|n| *n > 0) {
        filtered.truncate(limit);
    }
    Ok(filtered)
}

/// Counts entries per mood. Blank moods are counted as `"neutral"`.
pub fn summarize_moods(entries: &[Entry]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for entry in entries {
        let mood = entry.mood.trim();
        let mood = if mood.is_empty() { DEFAULT_MOOD } else { mood };
        *counts.entry(mood.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Orders a frequency map by count descending, then label ascending.
pub fn rank_counts(counts: HashMap<String, usize>) -> Vec<(String, usize)> {
    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|(a_name, a_count), (b_name, b_count)| {
        b_count.cmp(a_count).then_with(|| a_name.cmp(b_name))
    });
    ranked
}

/// Tag usage across all entries, most used first, ties broken by tag name.
///
/// A tag repeated within one entry counts every time. `top` caps the number
/// of distinct tags returned.
pub fn summarize_tags(entries: &[Entry], top: Option<usize>) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for tag in entries.iter().flat_map(|e| e.tags.iter()) {
        *counts.entry(tag.clone()).or_insert(0) += 1;
    }

    let mut ranked = rank_counts(counts);
    if let Some(top) = top {
        ranked.truncate(top);
    }
    ranked
}

/// Entries with reminders, split around today.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReminderReport<'a> {
    /// Reminder date strictly before today.
    pub overdue: Vec<&'a Entry>,
    /// Reminder date today or later, inside the lookahead window.
    pub upcoming: Vec<&'a Entry>,
}

impl ReminderReport<'_> {
    pub fn is_empty(&self) -> bool {
        self.overdue.is_empty() && self.upcoming.is_empty()
    }
}

/// Classifies every entry carrying a reminder, whatever its status.
///
/// Overdue entries are reported regardless of `window_days`. Upcoming entries
/// must fall on or before `today + window_days` when a window is given.
/// Entries without a reminder are skipped.
pub fn partition_reminders(
    entries: &[Entry],
    today: NaiveDate,
    window_days: Option<u32>,
) -> ReminderReport<'_> {
    // None means unbounded, including a window that overflows the calendar.
    let horizon = window_days.and_then(|days| today.checked_add_days(Days::new(u64::from(days))));

    let mut report = ReminderReport::default();
    for entry in entries {
        let Some(reminder) = entry.reminder else {
            continue;
        };
        if reminder < today {
            report.overdue.push(entry);
        } else if horizon.map_or(true, |h| reminder <= h) {
            report.upcoming.push(entry);
        }
    }
    report
}
