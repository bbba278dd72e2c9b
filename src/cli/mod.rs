//! Command-line interface definition.
//!
//! The argument structs here are plain data; dispatch lives in [`crate::ops`].

use crate::constants::{
    APP_DESCRIPTION, APP_NAME, DEFAULT_LIST_LIMIT, DEFAULT_MOOD, DEFAULT_REMIND_DAYS,
    DEFAULT_REVIEW_REMIND_DAYS, LOG_FORMAT_JSON, LOG_FORMAT_TEXT,
};
use clap::{ArgGroup, Args, Parser, Subcommand};
use uuid::Uuid;

/// Personal logbook CLI.
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Directory holding logbook.json (overrides SWANSONG_DIR)
    #[clap(long, global = true, value_name = "PATH")]
    pub data_dir: Option<String>,

    /// Print verbose (debug) logs to stderr
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[clap(long, global = true, default_value = LOG_FORMAT_TEXT, value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON])]
    pub log_format: String,

    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a fast journal entry.
    Add(AddArgs),
    /// Add an entry by answering prompts.
    Prompt,
    /// Browse recent entries.
    List(ListArgs),
    /// Show how often each tag is used.
    Tags(TagsArgs),
    /// Show overdue and upcoming reminders.
    Remind(RemindArgs),
    /// Mood snapshot followed by a reminder report.
    Review(ReviewArgs),
    /// Mark an entry as done.
    Complete(CompleteArgs),
    /// Write all entries to a JSON file.
    Export(ExportArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct AddArgs {
    #[clap(long)]
    pub title: String,
    #[clap(long)]
    pub body: String,
    /// Mood label
    #[clap(long, default_value = DEFAULT_MOOD)]
    pub mood: String,
    /// Comma-separated tags.
    #[clap(long, default_value = "")]
    pub tags: String,
    /// Optional follow-up date in YYYY-MM-DD.
    #[clap(long, value_name = "DATE")]
    pub remind: Option<String>,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ListArgs {
    /// Filter by mood label.
    #[clap(long)]
    pub mood: Option<String>,
    /// Filter by single tag.
    #[clap(long)]
    pub tag: Option<String>,
    /// Inclusive start date.
    #[clap(long, value_name = "DATE")]
    pub since: Option<String>,
    /// Inclusive end date.
    #[clap(long, value_name = "DATE")]
    pub until: Option<String>,
    #[clap(long, default_value_t = DEFAULT_LIST_LIMIT)]
    pub limit: usize,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct TagsArgs {
    /// Only show the N most used tags.
    #[clap(long, value_name = "N")]
    pub top: Option<usize>,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct RemindArgs {
    /// Lookahead window in days.
    #[clap(long, default_value_t = DEFAULT_REMIND_DAYS, conflicts_with = "all")]
    pub days: u32,
    /// Show every future reminder regardless of date.
    #[clap(long)]
    pub all: bool,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ReviewArgs {
    /// Lookahead window in days for the reminder report.
    #[clap(long, default_value_t = DEFAULT_REVIEW_REMIND_DAYS)]
    pub remind_days: u32,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
#[clap(group(ArgGroup::new("key").required(true).args(&["timestamp", "id"])))]
pub struct CompleteArgs {
    /// Timestamp of the entry, exactly as listed.
    #[clap(long)]
    pub timestamp: Option<String>,
    /// Id of the entry, as listed.
    #[clap(long)]
    pub id: Option<Uuid>,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ExportArgs {
    /// Destination file (defaults to logbook-export.json in the data directory).
    #[clap(long, value_name = "PATH")]
    pub output: Option<String>,
}
