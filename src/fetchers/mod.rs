//! Invocation builders for the external corpus fetchers.
//!
//! This module contains submodules for each external data-fetching program.
//! The programs themselves are Python scripts living outside this repository;
//! each submodule only knows its program's name, its default date window, and
//! the arguments it accepts.
//!
//! # Fetchers
//!
//! | Corpus | Module | Program | Notes |
//! |--------|--------|---------|-------|
//! | Fiction books | [`fiction`] | `fetch_fiction.py` | FictionDB monthly listings |
//! | Startups | [`startups`] | `fetch_startups.py` | Product Hunt daily listings |
//! | Preprints | [`osf_preprints`] | `fetch_osf_preprints.py` | One invocation per OSF provider |
//! | Podcasts | [`podcasts`] | `fetch_podcasts.py` | Podcast Index API; full runs only |
//! | NYT op-eds | [`nyt_opeds`] | `fetch_nyt_opeds.py` | Headline metadata only |
//!
//! # Sequence
//!
//! [`build_plan`] fixes the execution order: fiction, startups, one OSF
//! invocation per configured provider, podcasts (full runs only), NYT
//! op-eds. Pilot runs use a single one-month window and forward `--pilot`
//! to every fetcher.

use crate::models::{DateWindow, Invocation};
use crate::settings::Settings;
use chrono::NaiveDate;
use tracing::debug;

pub mod fiction;
pub mod nyt_opeds;
pub mod osf_preprints;
pub mod podcasts;
pub mod startups;

/// The one-month window every pilot step uses.
pub fn pilot_window() -> DateWindow {
    DateWindow {
        start: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        end: NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
    }
}

/// Assemble the fixed fetch sequence.
///
/// Every fetcher appears exactly once, in the order above, except the OSF
/// fetcher which appears once per configured provider and the podcast
/// fetcher which pilot runs skip. A window override replaces every step's
/// window; otherwise pilot runs use [`pilot_window`] and full runs use each
/// fetcher's own historical default.
///
/// # Arguments
///
/// * `settings` - Resolved runtime settings (providers, result limits)
/// * `pilot` - Whether this is a pilot run
/// * `window_override` - Window applied to every step when present
pub fn build_plan(
    settings: &Settings,
    pilot: bool,
    window_override: Option<&DateWindow>,
) -> Vec<Invocation> {
    let window_for = |default: DateWindow| -> DateWindow {
        if let Some(window) = window_override {
            *window
        } else if pilot {
            pilot_window()
        } else {
            default
        }
    };

    let mut plan = Vec::new();
    plan.push(fiction::invocation(
        &window_for(fiction::default_window()),
        pilot,
    ));
    plan.push(startups::invocation(
        &window_for(startups::default_window()),
        pilot,
    ));

    let max_results = if pilot {
        None
    } else {
        Some(settings.max_results_per_month)
    };
    plan.extend(osf_preprints::invocations(
        &window_for(osf_preprints::default_window()),
        &settings.providers,
        max_results,
        pilot,
    ));

    if !pilot {
        plan.push(podcasts::invocation(
            &window_for(podcasts::default_window()),
            settings.podcasts_n,
        ));
    }

    plan.push(nyt_opeds::invocation(
        &window_for(nyt_opeds::default_window()),
        pilot,
    ));

    debug!(steps = plan.len(), pilot, "Assembled fetch plan");
    plan
}
