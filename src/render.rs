//! Plain-text rendering of entries and summaries.

use crate::entry::Entry;
use crate::query::ReminderReport;

/// Renders one entry as a multi-line block.
///
/// ```
/// use swansong::entry::{Entry, EntryDraft, EntryStatus};
/// use swansong::render::format_entry;
///
/// let mut entry = Entry::build(
///     EntryDraft {
///         title: "Checkpoint".to_string(),
///         body: "Need to rewire the cache".to_string(),
///         mood: "thrilled".to_string(),
///         tags: "cache".to_string(),
///         remind: Some("2023-04-01".to_string()),
///     },
///     "2023-03-23T05:00:00",
/// )
/// .unwrap();
/// entry.status = Some(EntryStatus::Done);
///
/// assert!(format_entry(&entry).contains("[done]"));
/// ```
pub fn format_entry(entry: &Entry) -> String {
    let tags = if entry.tags.is_empty() {
        "none".to_string()
    } else {
        entry.tags.join(", ")
    };
    let reminder = entry
        .reminder
        .map(|date| date.to_string())
        .unwrap_or_else(|| "no reminder".to_string());

    format!(
        "- {} [{}] ({} @ {})\n  tags: {}\n  reminder: {}\n  id: {}\n  {}",
        entry.title,
        entry.status(),
        entry.mood,
        entry.timestamp,
        tags,
        reminder,
        entry.id,
        entry.body
    )
}

/// Renders entries separated by blank lines, or a notice when there are none.
pub fn format_entries(entries: &[&Entry]) -> String {
    if entries.is_empty() {
        return "no entries found\n".to_string();
    }
    entries
        .iter()
        .map(|entry| format!("{}\n\n", format_entry(entry)))
        .collect()
}

pub fn format_tag_summary(ranked: &[(String, usize)]) -> String {
    if ranked.is_empty() {
        return "no tags recorded\n".to_string();
    }
    ranked
        .iter()
        .map(|(tag, count)| format!("{}: {}\n", tag, count))
        .collect()
}

pub fn format_mood_snapshot(ranked: &[(String, usize)]) -> String {
    let mut out = String::from("mood snapshot:\n");
    if ranked.is_empty() {
        out.push_str("  no entries yet\n");
    }
    for (mood, count) in ranked {
        out.push_str(&format!("  {}: {}\n", mood, count));
    }
    out
}

pub fn format_reminder_report(report: &ReminderReport<'_>) -> String {
    if report.is_empty() {
        return "no reminders waiting\n".to_string();
    }

    let mut out = String::new();
    for (heading, entries) in [("overdue:", &report.overdue), ("upcoming:", &report.upcoming)] {
        if entries.is_empty() {
            continue;
        }
        out.push_str(heading);
        out.push('\n');
        for entry in entries.iter() {
            if let Some(due) = entry.reminder {
                out.push_str(&format!(
                    "- {} due {} (mood {})\n",
                    entry.title, due, entry.mood
                ));
            }
        }
    }
    out
}
