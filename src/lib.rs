/*!
# SwanSong

SwanSong is a small personal logbook for the command line. It records short
entries with a mood label, tags and an optional follow-up reminder date, keeps
them in a single local JSON file, and offers simple retrieval on top.

## Core Features

- Add entries from flags or by answering prompts
- List entries filtered by mood, tag and date range
- Tag usage and mood summaries
- Overdue and upcoming reminder reports
- Mark entries as done
- Export a JSON snapshot anywhere

## Architecture

- `entry`: the `Entry` record and input normalization
- `store`: loading and saving the logbook file
- `query`: pure filtering and aggregation
- `render`: plain-text output
- `ops`: one operation per subcommand
- `cli`: command-line interface handling using clap
- `config`: configuration loading and validation
- `errors`: error handling infrastructure

## Usage Example

```rust,no_run
use swansong::entry::EntryDraft;
use swansong::store::EntryStore;
use swansong::{ops, Config};

fn main() -> swansong::AppResult<()> {
    let config = Config::load(None)?;
    let store = EntryStore::new(config.logbook_path());

    let draft = EntryDraft {
        title: "Cache sketch".to_string(),
        body: "Notes after hours.".to_string(),
        mood: "curious".to_string(),
        tags: "cache,api".to_string(),
        remind: Some("2023-04-20".to_string()),
    };
    ops::add_entry(&store, draft)?;
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// The logbook entry model
pub mod entry;
/// Error types and utilities for error handling
pub mod errors;
/// Subcommand operations
pub mod ops;
/// Filtering and aggregation
pub mod query;
/// Plain-text rendering
pub mod render;
/// Logbook persistence
pub mod store;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use entry::Entry;
pub use errors::{AppError, AppResult};
pub use store::EntryStore;
