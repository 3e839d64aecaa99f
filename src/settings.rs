//! Runtime settings with optional YAML file overrides.
//!
//! Built-in defaults reproduce the original run scripts; a settings file can
//! override the interpreter, script location, OSF provider list, and the
//! result-count limits. Explicit command-line options win over file values.
//!
//! # File format
//!
//! ```yaml
//! python: python3.11
//! scripts_dir: /data/fetchers
//! providers:
//!   - socarxiv
//!   - psyarxiv
//! max_results_per_month: 100
//! podcasts_n: 500
//! report_dir: /data/reports
//! ```
//!
//! Every key is optional; omitted keys keep their defaults.

use crate::cli::Cli;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use tracing::info;

/// Providers the OSF preprint fetcher recognizes.
pub const KNOWN_PROVIDERS: [&str; 3] = ["socarxiv", "psyarxiv", "medarxiv"];

/// Resolved runtime settings for a fetch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Python interpreter used to run the fetchers.
    pub python: String,
    /// Directory containing the `fetch_*.py` scripts.
    pub scripts_dir: String,
    /// OSF preprint providers, one fetcher invocation each, in order.
    pub providers: Vec<String>,
    /// `--max_results_per_month` passed to the OSF fetcher on full runs.
    pub max_results_per_month: u32,
    /// `--N` passed to the podcast fetcher on full runs.
    pub podcasts_n: u32,
    /// Where to write the JSON run report, if anywhere.
    pub report_dir: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            python: "python3".to_string(),
            scripts_dir: ".".to_string(),
            providers: vec!["socarxiv".to_string(), "psyarxiv".to_string()],
            max_results_per_month: 100,
            podcasts_n: 500,
            report_dir: None,
        }
    }
}

impl Settings {
    /// Check the settings for values the fetchers would reject.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider list is empty or names an unknown
    /// provider, or if either result limit is zero.
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.providers.is_empty() {
            return Err("at least one OSF provider must be configured".into());
        }
        for provider in &self.providers {
            if !KNOWN_PROVIDERS.contains(&provider.as_str()) {
                return Err(format!(
                    "unknown OSF provider: {provider} (expected one of {KNOWN_PROVIDERS:?})"
                )
                .into());
            }
        }
        if self.max_results_per_month == 0 {
            return Err("max_results_per_month must be positive".into());
        }
        if self.podcasts_n == 0 {
            return Err("podcasts_n must be positive".into());
        }
        Ok(())
    }

    /// Fold explicit command-line options into the settings.
    pub fn apply_cli(&mut self, args: &Cli) {
        if let Some(python) = &args.python {
            self.python = python.clone();
        }
        if let Some(scripts_dir) = &args.scripts_dir {
            self.scripts_dir = scripts_dir.clone();
        }
        if let Some(report_dir) = &args.report_dir {
            self.report_dir = Some(report_dir.clone());
        }
    }
}

/// Parse settings from YAML text and validate them.
pub fn parse(raw: &str) -> Result<Settings, Box<dyn Error>> {
    let settings: Settings = serde_yaml::from_str(raw)?;
    settings.validate()?;
    Ok(settings)
}

/// Load and validate a settings file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid YAML, or fails
/// [`Settings::validate`]. A bad settings file is the one failure that stops
/// a run before it starts.
pub fn load(path: &str) -> Result<Settings, Box<dyn Error>> {
    let raw = fs::read_to_string(path)?;
    let settings = parse(&raw)?;
    info!(path, "Loaded settings file");
    Ok(settings)
}
