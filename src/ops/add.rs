//! Recording new entries, from flags or interactive prompts.

use crate::constants::DEFAULT_MOOD;
use crate::entry::{current_timestamp, Entry, EntryDraft};
use crate::errors::AppResult;
use crate::store::EntryStore;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Builds an entry stamped with the current time and appends it to the store.
///
/// # Errors
///
/// Returns `AppError::Validation` for a malformed reminder date, otherwise
/// whatever the store reports.
pub fn add_entry(store: &EntryStore, draft: EntryDraft) -> AppResult<Entry> {
    let entry = Entry::build(draft, current_timestamp())?;
    debug!("Built entry with {} tags", entry.tags.len());
    let entry = store.append(entry)?;
    info!("Entry {} recorded", entry.id);
    Ok(entry)
}

/// Asks for each field on `output` and reads the answers from `input`.
///
/// A blank answer, or end of input, leaves the field empty so that the usual
/// defaults apply when the entry is built.
pub fn prompt_draft<R, W>(input: &mut R, output: &mut W) -> AppResult<EntryDraft>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let title = ask(input, output, "Title: ")?;
    let body = ask(input, output, "Body: ")?;
    let mood = ask(input, output, &format!("Mood [{}]: ", DEFAULT_MOOD))?;
    let tags = ask(input, output, "Tags (comma separated): ")?;
    let remind = ask(input, output, "Reminder (YYYY-MM-DD, blank for none): ")?;

    Ok(EntryDraft {
        title,
        body,
        mood,
        tags,
        remind: if remind.is_empty() { None } else { Some(remind) },
    })
}

fn ask<R, W>(input: &mut R, output: &mut W, question: &str) -> AppResult<String>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
