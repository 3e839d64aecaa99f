//! Command-line interface definitions for the corpus fetch runner.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Interpreter and script-directory options can also be provided via
//! environment variables.

use chrono::NaiveDate;
use clap::Parser;

/// Command-line arguments for the corpus fetch runner.
///
/// The defaults reproduce the full historical run; `--pilot` switches to the
/// reduced one-month sequence used for prompt engineering. Date overrides
/// apply to every fetcher in the plan.
///
/// # Examples
///
/// ```sh
/// # Full run with the fetchers checked out next to the binary
/// corpus_fetch --scripts-dir ./fetchers
///
/// # Pilot run, plan only
/// corpus_fetch --pilot --dry-run
///
/// # Custom window for every fetcher, with a run report
/// corpus_fetch --start-date 2022-01-01 --end-date 2022-06-01 -r ./reports
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Run the reduced pilot sequence (one-month window, `--pilot` forwarded
    /// to every fetcher, podcasts skipped)
    #[arg(long)]
    pub pilot: bool,

    /// Override the start of every fetcher's date window
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub start_date: Option<NaiveDate>,

    /// Override the end of every fetcher's date window
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub end_date: Option<NaiveDate>,

    /// Directory containing the external fetch_*.py scripts
    #[arg(short, long, env = "CORPUS_SCRIPTS_DIR")]
    pub scripts_dir: Option<String>,

    /// Python interpreter used to run the fetchers
    #[arg(long, env = "CORPUS_PYTHON")]
    pub python: Option<String>,

    /// Optional path to a YAML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output directory for the JSON run report
    #[arg(short, long)]
    pub report_dir: Option<String>,

    /// Print the planned command lines without executing anything
    #[arg(long)]
    pub dry_run: bool,
}
