//! # Corpus Fetch
//!
//! A command-line runner that drives the external corpus fetchers over
//! configured date windows, strictly one after another, and reports what
//! happened.
//!
//! ## Corpora
//!
//! Each run invokes the external Python fetch scripts in a fixed order:
//! fiction books (FictionDB), startups (Product Hunt), OSF preprints
//! (socarxiv and psyarxiv), podcasts (Podcast Index), and NYT op-ed
//! metadata. The fetchers own all HTTP, pagination, parsing, and file
//! output; this binary owns the sequence and the literal arguments.
//!
//! ## Usage
//!
//! ```sh
//! # Full historical run
//! corpus_fetch --scripts-dir ./fetchers
//!
//! # One-month pilot run for prompt engineering
//! corpus_fetch --scripts-dir ./fetchers --pilot
//!
//! # Show the plan without running anything
//! corpus_fetch --pilot --dry-run
//! ```
//!
//! ## Architecture
//!
//! The application runs as a flat sequence:
//! 1. **Plan**: Build the ordered invocation list from settings and flags
//! 2. **Execute**: Spawn each fetcher and wait for it, one at a time
//! 3. **Report**: Optionally write a JSON run report
//!
//! Fetcher failures are logged and recorded but never stop the sequence;
//! the runner's own exit code says nothing about the fetchers.

use chrono::Local;
use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod fetchers;
mod models;
mod outputs;
mod runner;
mod settings;
mod utils;

use cli::Cli;
use models::{DateWindow, RunReport};
use runner::ProcessInvoker;
use settings::Settings;
use utils::{ensure_writable_dir, months_between};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("corpus_fetch starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    // --- Settings: built-in defaults, file overrides, CLI wins ---
    let mut settings = match &args.config {
        Some(path) => settings::load(path)?,
        None => Settings::default(),
    };
    settings.apply_cli(&args);
    debug!(?settings, "Resolved settings");

    // Date overrides come as a pair or not at all.
    let window_override = match (args.start_date, args.end_date) {
        (Some(start), Some(end)) => {
            let window = DateWindow::new(start, end)?;
            info!(
                start = %window.start,
                end = %window.end,
                months = months_between(window.start, window.end),
                "Applying date window override to every fetcher"
            );
            Some(window)
        }
        (None, None) => None,
        _ => return Err("--start-date and --end-date must be given together".into()),
    };

    let mode = if args.pilot { "pilot" } else { "full" };

    // ---- Build the plan ----
    let plan = fetchers::build_plan(&settings, args.pilot, window_override.as_ref());
    info!(mode, steps = plan.len(), "Planned fetch sequence");

    let invoker = ProcessInvoker {
        python: settings.python.clone(),
        scripts_dir: settings.scripts_dir.clone(),
    };
    for invocation in &plan {
        info!(
            fetcher = %invocation.fetcher,
            command = %invoker.render_command(invocation),
            "Planned step"
        );
    }

    if args.dry_run {
        for invocation in &plan {
            println!("{}", invoker.render_command(invocation));
        }
        println!(
            "Dry run: {} fetcher invocations planned, nothing executed.",
            plan.len()
        );
        return Ok(());
    }

    // Early check: a configured report dir that can't be written shouldn't
    // surface only after hours of fetching.
    let report_dir = match settings.report_dir.clone() {
        Some(dir) => {
            if let Err(e) = ensure_writable_dir(&dir).await {
                warn!(
                    path = %dir,
                    error = %e,
                    "Report directory is not writable; continuing without a report"
                );
                None
            } else {
                Some(dir)
            }
        }
        None => None,
    };

    let local_date = Local::now().date_naive().to_string();
    let local_time = Local::now().time().to_string();

    // ---- Execute, strictly in sequence ----
    let outcomes = runner::run_sequence(&invoker, &plan).await;

    let succeeded = outcomes.iter().filter(|o| o.success).count();
    let failed = outcomes.len() - succeeded;
    info!(
        total = outcomes.len(),
        succeeded, failed, "Completed fetch sequence"
    );

    // ---- Run report ----
    if let Some(dir) = report_dir {
        let report = RunReport {
            mode: mode.to_string(),
            local_date,
            local_time,
            succeeded,
            failed,
            duration_secs: start_time.elapsed().as_secs(),
            steps: outcomes,
        };
        if let Err(e) = outputs::json::write_report(&report, &dir).await {
            error!(error = %e, "Failed to write run report");
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    println!(
        "Corpus fetch complete ({mode} run): {succeeded}/{total} fetcher invocations succeeded.",
        total = succeeded + failed
    );

    Ok(())
}
