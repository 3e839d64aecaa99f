//! Data models for fetch runs and their outcomes.
//!
//! This module defines the core data structures used throughout the runner:
//! - [`DateWindow`]: The half-open date range handed to every fetcher
//! - [`Invocation`]: One planned external fetcher call (program + argv)
//! - [`StepOutcome`]: What actually happened when an invocation ran
//! - [`RunReport`]: Collection of outcomes for a single run, serialized to JSON
//!
//! An [`Invocation`] is deliberately inert: it carries the literal arguments
//! and nothing else, so a plan can be inspected, printed, and tested without
//! touching the process table.

use chrono::NaiveDate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::error::Error;

/// A date range passed to the external fetchers as `--start_date`/`--end_date`.
///
/// The range is half-open: the fetchers paginate month by month from `start`
/// up to but not including `end`, matching their own argparse conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    /// First day covered, inclusive.
    pub start: NaiveDate,
    /// First day no longer covered, exclusive.
    pub end: NaiveDate,
}

impl DateWindow {
    /// Create a window, rejecting empty or inverted ranges.
    ///
    /// # Errors
    ///
    /// Returns an error if `end` is not strictly after `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, Box<dyn Error>> {
        if end <= start {
            return Err(format!("empty date window: {start} is not before {end}").into());
        }
        Ok(Self { start, end })
    }

    /// Render the window as the `--start_date`/`--end_date` argument pair
    /// that every fetcher accepts.
    pub fn cli_args(&self) -> Vec<String> {
        vec![
            "--start_date".to_string(),
            self.start.to_string(),
            "--end_date".to_string(),
            self.end.to_string(),
        ]
    }
}

/// One planned call to an external fetcher program.
///
/// # Fields
///
/// * `fetcher` - Short label for logs and reports (e.g. `"fiction"`,
///   `"osf_preprints/socarxiv"`)
/// * `program` - The external program's file name (e.g. `"fetch_fiction.py"`)
/// * `args` - The literal argument vector, in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    /// Label identifying the fetcher in logs and reports.
    pub fetcher: String,
    /// File name of the external program.
    pub program: String,
    /// Literal arguments passed to the program, in order.
    pub args: Vec<String>,
}

impl Invocation {
    /// Render the invocation as a single command line (program followed by
    /// its arguments, space-separated). Interpreter and script directory are
    /// a runner concern and not part of this rendering.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .join(" ")
    }
}

/// The recorded result of running one [`Invocation`].
///
/// Exit statuses are recorded but never acted upon: a failed fetcher does not
/// stop the sequence and does not change the runner's own exit code.
#[derive(Debug, Clone, Serialize)]
pub struct StepOutcome {
    /// Label of the fetcher that ran.
    pub fetcher: String,
    /// The command line that was executed (without interpreter prefix).
    pub command_line: String,
    /// The child's exit code, if it ran and exited normally.
    pub exit_code: Option<i32>,
    /// Spawn error message, if the program could not be started at all.
    pub error: Option<String>,
    /// Whether the step completed with exit code 0.
    pub success: bool,
    /// Wall-clock duration of the step in milliseconds.
    pub duration_ms: u64,
}

impl StepOutcome {
    /// Outcome for a child that was spawned and waited on.
    ///
    /// `exit_code` is `None` when the child was terminated by a signal.
    pub fn completed(invocation: &Invocation, exit_code: Option<i32>, duration_ms: u64) -> Self {
        Self {
            fetcher: invocation.fetcher.clone(),
            command_line: invocation.command_line(),
            exit_code,
            error: None,
            success: exit_code == Some(0),
            duration_ms,
        }
    }

    /// Outcome for a child that could not be spawned.
    pub fn failed_to_start(invocation: &Invocation, error: &str, duration_ms: u64) -> Self {
        Self {
            fetcher: invocation.fetcher.clone(),
            command_line: invocation.command_line(),
            exit_code: None,
            error: Some(error.to_string()),
            success: false,
            duration_ms,
        }
    }
}

/// Everything recorded about a single run, for the optional JSON report.
///
/// The date/time fields use local time in the same string formats the rest
/// of the tooling expects (`YYYY-MM-DD` and `HH:MM:SS.micros`).
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// The run mode: `"full"` or `"pilot"`.
    pub mode: String,
    /// Local date the run started, `YYYY-MM-DD`.
    pub local_date: String,
    /// Local time the run started.
    pub local_time: String,
    /// Number of invocations that exited 0.
    pub succeeded: usize,
    /// Number of invocations that exited nonzero or failed to start.
    pub failed: usize,
    /// Total run duration in seconds.
    pub duration_secs: u64,
    /// Per-step outcomes, in execution order.
    pub steps: Vec<StepOutcome>,
}
