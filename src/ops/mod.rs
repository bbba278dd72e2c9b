//! User-facing operations behind each subcommand.
//!
//! Every operation is a single synchronous transaction against the
//! [`EntryStore`](crate::store::EntryStore): load, optionally modify and save,
//! then render. [`run`] maps parsed CLI commands onto them and writes the
//! rendered text.

pub mod add;
pub mod browse;
pub mod complete;
pub mod export;
pub mod review;

// Re-export commonly used functions
pub use add::{add_entry, prompt_draft};
pub use browse::{list_entries, tag_report};
pub use complete::{complete_entry, EntryKey};
pub use export::export_entries;
pub use review::{remind_report, review_report};

use crate::cli::{AddArgs, Command, CompleteArgs};
use crate::config::Config;
use crate::entry::EntryDraft;
use crate::errors::{AppError, AppResult};
use crate::query::EntryFilter;
use crate::store::EntryStore;
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Runs one command and writes its output.
///
/// `input` is only read by `prompt`. `today` anchors the reminder windows.
pub fn run(
    command: Command,
    config: &Config,
    store: &EntryStore,
    today: NaiveDate,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> AppResult<()> {
    match command {
        Command::Add(args) => {
            let entry = add_entry(store, draft_from_args(args))?;
            writeln!(out, "entry recorded ({})", entry.timestamp)?;
        }
        Command::Prompt => {
            let draft = prompt_draft(&mut *input, &mut *out)?;
            let entry = add_entry(store, draft)?;
            writeln!(out, "entry recorded ({})", entry.timestamp)?;
        }
        Command::List(args) => {
            let filter = EntryFilter {
                mood: args.mood,
                tag: args.tag,
                limit: Some(args.limit),
                ..EntryFilter::default()
            }
            .parse_range(args.since.as_deref(), args.until.as_deref())?;
            write!(out, "{}", list_entries(store, &filter)?)?;
        }
        Command::Tags(args) => {
            write!(out, "{}", tag_report(store, args.top)?)?;
        }
        Command::Remind(args) => {
            let window = if args.all { None } else { Some(args.days) };
            write!(out, "{}", remind_report(store, today, window)?)?;
        }
        Command::Review(args) => {
            write!(out, "{}", review_report(store, today, args.remind_days)?)?;
        }
        Command::Complete(args) => {
            let key = key_from_args(args)?;
            if complete_entry(store, &key)? {
                writeln!(out, "marked {} as done", key)?;
            } else {
                writeln!(out, "no entry found for {}", key)?;
            }
        }
        Command::Export(args) => {
            let destination = args
                .output
                .map(PathBuf::from)
                .unwrap_or_else(|| config.default_export_path());
            let entries = store.load()?;
            let written = export_entries(&entries, &destination)?;
            writeln!(
                out,
                "exported {} entries to {}",
                entries.len(),
                written.display()
            )?;
        }
    }
    Ok(())
}

fn draft_from_args(args: AddArgs) -> EntryDraft {
    EntryDraft {
        title: args.title,
        body: args.body,
        mood: args.mood,
        tags: args.tags,
        remind: args.remind,
    }
}

fn key_from_args(args: CompleteArgs) -> AppResult<EntryKey> {
    match (args.timestamp, args.id) {
        (Some(ts), None) => Ok(EntryKey::Timestamp(ts)),
        (None, Some(id)) => Ok(EntryKey::Id(id)),
        _ => Err(AppError::Validation {
            value: "complete".to_string(),
            expected: "exactly one of --timestamp or --id".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{ExportArgs, ListArgs, RemindArgs};
    use std::io::Cursor;
    use tempfile::tempdir;

    fn run_command(command: Command, config: &Config, input: &str) -> AppResult<String> {
        let store = EntryStore::new(config.logbook_path());
        let today = NaiveDate::from_ymd_opt(2023, 5, 1).unwrap();
        let mut input = Cursor::new(input.to_string());
        let mut out = Vec::new();
        run(command, config, &store, today, &mut input, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn add(title: &str, remind: Option<&str>) -> Command {
        Command::Add(AddArgs {
            title: title.to_string(),
            body: "body".to_string(),
            mood: "neutral".to_string(),
            tags: "research".to_string(),
            remind: remind.map(str::to_string),
        })
    }

    #[test]
    fn test_add_then_list() {
        let dir = tempdir().unwrap();
        let config = Config {
            data_dir: dir.path().to_path_buf(),
        };

        let added = run_command(add("Night dive", Some("2023-05-03")), &config, "").unwrap();
        assert!(added.starts_with("entry recorded ("));

        let listed = run_command(
            Command::List(ListArgs {
                mood: None,
                tag: Some("research".to_string()),
                since: None,
                until: None,
                limit: 10,
            }),
            &config,
            "",
        )
        .unwrap();
        assert!(listed.contains("- Night dive [open] (neutral @ "));

        let reminders = run_command(
            Command::Remind(RemindArgs { days: 30, all: false }),
            &config,
            "",
        )
        .unwrap();
        assert_eq!(
            reminders,
            "upcoming:\n- Night dive due 2023-05-03 (mood neutral)\n"
        );
    }

    #[test]
    fn test_prompt_records_entry() {
        let dir = tempdir().unwrap();
        let config = Config {
            data_dir: dir.path().to_path_buf(),
        };

        let output = run_command(Command::Prompt, &config, "Quiet proof\n\ntired\n\n\n").unwrap();

        assert!(output.contains("Title: "));
        assert!(output.contains("entry recorded ("));
        let entries = EntryStore::new(config.logbook_path()).load().unwrap();
        assert_eq!(entries[0].title, "Quiet proof");
        assert_eq!(entries[0].mood, "tired");
    }

    #[test]
    fn test_list_rejects_bad_since() {
        let dir = tempdir().unwrap();
        let config = Config {
            data_dir: dir.path().to_path_buf(),
        };

        let result = run_command(
            Command::List(ListArgs {
                mood: None,
                tag: None,
                since: Some("yesterday".to_string()),
                until: None,
                limit: 10,
            }),
            &config,
            "",
        );

        match result {
            Err(AppError::Validation { value, .. }) => assert_eq!(value, "yesterday"),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_complete_reports_outcome() {
        let dir = tempdir().unwrap();
        let config = Config {
            data_dir: dir.path().to_path_buf(),
        };
        run_command(add("Checkpoint", None), &config, "").unwrap();
        let timestamp = EntryStore::new(config.logbook_path()).load().unwrap()[0]
            .timestamp
            .clone();

        let done = run_command(
            Command::Complete(CompleteArgs {
                timestamp: Some(timestamp.clone()),
                id: None,
            }),
            &config,
            "",
        )
        .unwrap();
        assert_eq!(done, format!("marked {} as done\n", timestamp));

        let missing = run_command(
            Command::Complete(CompleteArgs {
                timestamp: Some("1999-01-01T00:00:00".to_string()),
                id: None,
            }),
            &config,
            "",
        )
        .unwrap();
        assert_eq!(missing, "no entry found for 1999-01-01T00:00:00\n");
    }

    #[test]
    fn test_export_defaults_to_data_dir() {
        let dir = tempdir().unwrap();
        let config = Config {
            data_dir: dir.path().to_path_buf(),
        };
        run_command(add("One", None), &config, "").unwrap();
        run_command(add("Two", None), &config, "").unwrap();

        let output = run_command(Command::Export(ExportArgs { output: None }), &config, "").unwrap();

        let expected = config.default_export_path();
        assert_eq!(
            output,
            format!("exported 2 entries to {}\n", expected.display())
        );
        assert!(expected.exists());
    }
}
