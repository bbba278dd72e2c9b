/*!
# SwanSong - A Personal Logbook

This file contains the main application flow: logging setup, argument parsing,
configuration, and dispatch to the operation behind each subcommand.

## Usage

```
swansong [OPTIONS] [COMMAND]

Commands:
  add       Add a fast journal entry.
  prompt    Add an entry by answering prompts.
  list      Browse recent entries.
  tags      Show how often each tag is used.
  remind    Show overdue and upcoming reminders.
  review    Mood snapshot followed by a reminder report.
  complete  Mark an entry as done.
  export    Write all entries to a JSON file.

Options:
      --data-dir <PATH>          Directory holding logbook.json (overrides SWANSONG_DIR)
  -v, --verbose                  Print verbose (debug) logs to stderr
      --log-format <LOG_FORMAT>  Log output format [default: text] [possible values: text, json]
```

## Configuration

- `SWANSONG_DIR`: the directory holding `logbook.json` (defaults to `~/.swansong`)
- `RUST_LOG`: overrides the log filter
*/

use chrono::Local;
use clap::{CommandFactory, Parser};
use std::io;
use std::process::ExitCode;
use swansong::cli::CliArgs;
use swansong::config::Config;
use swansong::constants::{
    DEFAULT_LOG_LEVEL, LOG_FORMAT_JSON, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME,
    VERBOSE_LOG_LEVEL,
};
use swansong::errors::AppResult;
use swansong::ops;
use swansong::store::EntryStore;
use tracing::{debug, error, info, info_span};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

fn init_tracing(verbose: bool, log_format: &str) {
    let default_level = if verbose {
        VERBOSE_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if log_format == LOG_FORMAT_JSON {
        builder.json().with_current_span(true).init();
    } else {
        builder.with_target(false).init();
    }
}

fn run(args: CliArgs) -> AppResult<()> {
    let Some(command) = args.command else {
        CliArgs::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = Config::load(args.data_dir.as_deref())?;
    config.validate()?;
    debug!("Configuration loaded: {:?}", config);

    let store = EntryStore::new(config.logbook_path());
    let today = Local::now().date_naive();

    let stdin = io::stdin();
    let stdout = io::stdout();
    ops::run(
        command,
        &config,
        &store,
        today,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose, &args.log_format);

    let correlation_id = Uuid::new_v4();
    let span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service_name = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = span.enter();
    info!("Starting swansong");
    debug!("CLI arguments: {:?}", args);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
