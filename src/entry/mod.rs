//! The logbook entry model without any I/O.
//!
//! This module defines the `Entry` record stored in the logbook, the rules for
//! turning raw user input into an entry (tag normalization, placeholders for
//! blank fields, reminder parsing) and timestamp helpers.

use crate::constants::{
    DATE_FORMAT_ISO, DEFAULT_MOOD, PLACEHOLDER_BODY, PLACEHOLDER_TITLE, STATUS_DONE, STATUS_OPEN,
    TIMESTAMP_DATE_LEN, TIMESTAMP_FORMAT,
};
use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

/// Completion state of an entry.
///
/// Entries written without a `status` field are implicitly open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Open,
    Done,
}

impl EntryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryStatus::Open => STATUS_OPEN,
            EntryStatus::Done => STATUS_DONE,
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single logbook record.
///
/// The `timestamp` is assigned once at creation and never changes; it is both
/// the sort key (ISO-8601 strings sort chronologically) and a lookup key for
/// `complete`. Because two entries may share a timestamp, every entry also
/// carries a random `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier. Records written before ids existed deserialize
    /// as nil; see [`assign_missing_ids`].
    #[serde(default)]
    pub id: Uuid,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default = "default_mood", deserialize_with = "mood_or_default")]
    pub mood: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "reminder_or_none")]
    pub reminder: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EntryStatus>,
}

fn default_mood() -> String {
    DEFAULT_MOOD.to_string()
}

fn mood_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let mood = Option::<String>::deserialize(deserializer)?;
    Ok(non_blank_or(mood.as_deref().unwrap_or(""), DEFAULT_MOOD))
}

/// Older logbooks store the reminder as free text; blank means no reminder.
fn reminder_or_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_iso_date(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Raw field values for a new entry, as typed by the user.
///
/// Nothing here is validated yet; [`Entry::build`] applies the defaulting
/// rules and parses the reminder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub title: String,
    pub body: String,
    pub mood: String,
    /// Comma separated tag list.
    pub tags: String,
    /// Follow-up date in `YYYY-MM-DD` form.
    pub remind: Option<String>,
}

impl Entry {
    /// Builds an entry from user input with an explicit timestamp.
    ///
    /// Blank title and body become placeholders, a blank mood becomes
    /// `"neutral"`, tags are normalized with [`normalize_tags`] and a blank
    /// reminder means no reminder.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the reminder is not a `YYYY-MM-DD` date.
    ///
    /// # Examples
    ///
    /// ```
    /// use swansong::entry::{Entry, EntryDraft};
    ///
    /// let draft = EntryDraft {
    ///     title: "title".to_string(),
    ///     body: "body".to_string(),
    ///     mood: "moody".to_string(),
    ///     tags: "tag1,tag2".to_string(),
    ///     remind: None,
    /// };
    /// let entry = Entry::build(draft, "2022-01-02T03:04:05").unwrap();
    /// assert_eq!(entry.timestamp, "2022-01-02T03:04:05");
    /// assert_eq!(entry.tags, vec!["tag1", "tag2"]);
    /// assert_eq!(entry.mood, "moody");
    /// ```
    pub fn build(draft: EntryDraft, timestamp: impl Into<String>) -> AppResult<Self> {
        let reminder = match draft.remind.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_iso_date(raw)?),
        };

        Ok(Entry {
            id: Uuid::new_v4(),
            title: non_blank_or(&draft.title, PLACEHOLDER_TITLE),
            body: non_blank_or(&draft.body, PLACEHOLDER_BODY),
            mood: non_blank_or(&draft.mood, DEFAULT_MOOD),
            timestamp: timestamp.into(),
            tags: normalize_tags(&draft.tags),
            reminder,
            status: None,
        })
    }

    /// The calendar date the entry was written on, taken from the timestamp.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when the timestamp does not start with a
    /// `YYYY-MM-DD` date.
    pub fn date(&self) -> AppResult<NaiveDate> {
        let prefix = self
            .timestamp
            .get(..TIMESTAMP_DATE_LEN)
            .ok_or_else(|| AppError::invalid_date(self.timestamp.as_str()))?;
        parse_iso_date(prefix).map_err(|_| AppError::invalid_date(self.timestamp.as_str()))
    }

    /// Effective status; entries without one are open.
    pub fn status(&self) -> EntryStatus {
        self.status.unwrap_or(EntryStatus::Open)
    }

    pub fn is_done(&self) -> bool {
        self.status() == EntryStatus::Done
    }
}

/// Splits a comma separated tag string, trimming each fragment and dropping
/// empty ones. Order is kept and duplicates are not removed.
///
/// ```
/// use swansong::entry::normalize_tags;
///
/// assert_eq!(
///     normalize_tags("  research,api , , curiosity   "),
///     vec!["research", "api", "curiosity"]
/// );
/// ```
pub fn normalize_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses a strict `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `AppError::Validation` naming the offending value.
pub fn parse_iso_date(value: &str) -> AppResult<NaiveDate> {
    // chrono accepts unpadded fields such as 2023-1-5
    if value.len() != TIMESTAMP_DATE_LEN {
        return Err(AppError::invalid_date(value));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT_ISO).map_err(|_| AppError::invalid_date(value))
}

/// Gives every entry read without an id a stable one.
///
/// The id is derived from the timestamp and the record's position in the
/// file, so the same unmodified file yields the same ids on every read and
/// `complete --id` works before the file is ever rewritten.
pub fn assign_missing_ids(entries: &mut [Entry]) -> usize {
    let mut assigned = 0;
    for (position, entry) in entries.iter_mut().enumerate() {
        if entry.id.is_nil() {
            let name = format!("{}#{}", entry.timestamp, position);
            entry.id = Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes());
            assigned += 1;
        }
    }
    assigned
}

/// Current UTC time formatted as an entry timestamp.
pub fn current_timestamp() -> String {
    Utc::now().naive_utc().format(TIMESTAMP_FORMAT).to_string()
}

/// Sorts entries newest first by comparing timestamp strings.
///
/// The sort is stable, so entries sharing a timestamp keep their relative order.
pub fn sort_newest_first(entries: &mut [Entry]) {
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

fn non_blank_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
