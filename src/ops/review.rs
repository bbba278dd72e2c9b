//! Reminder lookahead and the periodic review.

use crate::errors::AppResult;
use crate::query::{partition_reminders, rank_counts, summarize_moods};
use crate::render::{format_mood_snapshot, format_reminder_report};
use crate::store::EntryStore;
use chrono::NaiveDate;
use tracing::debug;

/// Renders overdue reminders plus those due within `window_days` of `today`.
/// `None` means no upper bound.
pub fn remind_report(
    store: &EntryStore,
    today: NaiveDate,
    window_days: Option<u32>,
) -> AppResult<String> {
    let entries = store.load()?;
    let report = partition_reminders(&entries, today, window_days);
    debug!(
        "{} overdue, {} upcoming reminders",
        report.overdue.len(),
        report.upcoming.len()
    );
    Ok(format_reminder_report(&report))
}

/// Renders the mood snapshot followed by the reminder report.
pub fn review_report(store: &EntryStore, today: NaiveDate, remind_days: u32) -> AppResult<String> {
    let entries = store.load()?;
    let moods = rank_counts(summarize_moods(&entries));
    let report = partition_reminders(&entries, today, Some(remind_days));

    Ok(format!(
        "{}\n{}",
        format_mood_snapshot(&moods),
        format_reminder_report(&report)
    ))
}
