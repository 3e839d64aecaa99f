//! OSF preprint fetcher invocations.
//!
//! `fetch_osf_preprints.py` queries the OSF preprints API for one provider
//! at a time, so the plan carries one invocation per configured provider.
//! The provider must be one the script recognizes (`socarxiv`, `psyarxiv`,
//! `medarxiv`); the settings layer enforces that before a plan is built.
//!
//! Full runs pass `--max_results_per_month` explicitly; pilot runs leave it
//! to the script's default.

use crate::models::{DateWindow, Invocation};
use chrono::NaiveDate;

/// File name of the external program.
pub const PROGRAM: &str = "fetch_osf_preprints.py";

/// Historical window used by full runs.
pub fn default_window() -> DateWindow {
    DateWindow {
        start: NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
        end: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
    }
}

/// Build one invocation per provider, preserving provider order.
///
/// # Arguments
///
/// * `window` - Date window for every provider
/// * `providers` - Providers to fetch, one invocation each
/// * `max_results_per_month` - Forwarded when present (full runs)
/// * `pilot` - Whether to forward `--pilot`
pub fn invocations(
    window: &DateWindow,
    providers: &[String],
    max_results_per_month: Option<u32>,
    pilot: bool,
) -> Vec<Invocation> {
    providers
        .iter()
        .map(|provider| {
            let mut args = window.cli_args();
            args.push("--provider".to_string());
            args.push(provider.clone());
            if let Some(max_results) = max_results_per_month {
                args.push("--max_results_per_month".to_string());
                args.push(max_results.to_string());
            }
            if pilot {
                args.push("--pilot".to_string());
            }
            Invocation {
                fetcher: format!("osf_preprints/{provider}"),
                program: PROGRAM.to_string(),
                args,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn providers() -> Vec<String> {
        vec!["socarxiv".to_string(), "psyarxiv".to_string()]
    }

    #[test]
    fn test_one_invocation_per_provider() {
        let invocations = invocations(&default_window(), &providers(), Some(100), false);

        assert_eq!(invocations.len(), 2);
        assert_eq!(
            invocations[0].command_line(),
            "fetch_osf_preprints.py --start_date 2018-01-01 --end_date 2023-01-01 \
             --provider socarxiv --max_results_per_month 100"
        );
        assert_eq!(
            invocations[1].command_line(),
            "fetch_osf_preprints.py --start_date 2018-01-01 --end_date 2023-01-01 \
             --provider psyarxiv --max_results_per_month 100"
        );
    }

    #[test]
    fn test_pilot_omits_max_results() {
        let window = DateWindow {
            start: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
        };
        let invocations = invocations(&window, &providers(), None, true);

        assert_eq!(
            invocations[0].command_line(),
            "fetch_osf_preprints.py --start_date 2023-01-01 --end_date 2023-02-01 \
             --provider socarxiv --pilot"
        );
        assert!(
            invocations
                .iter()
                .all(|i| !i.args.contains(&"--max_results_per_month".to_string()))
        );
    }

    #[test]
    fn test_no_providers_yields_no_invocations() {
        assert!(invocations(&default_window(), &[], Some(100), false).is_empty());
    }
}
