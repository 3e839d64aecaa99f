//! Podcast corpus fetcher invocation.
//!
//! `fetch_podcasts.py` pulls show metadata from the Podcast Index API and
//! trims the result to the `--N` most relevant entries. Pilot runs skip the
//! podcast corpus entirely, so this builder takes no pilot flag.

use crate::models::{DateWindow, Invocation};
use chrono::NaiveDate;

/// File name of the external program.
pub const PROGRAM: &str = "fetch_podcasts.py";

/// Historical window used by full runs.
pub fn default_window() -> DateWindow {
    DateWindow {
        start: NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
        end: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
    }
}

/// Build the podcast invocation for the given window and result count.
pub fn invocation(window: &DateWindow, n: u32) -> Invocation {
    let mut args = window.cli_args();
    args.push("--N".to_string());
    args.push(n.to_string());
    Invocation {
        fetcher: "podcasts".to_string(),
        program: PROGRAM.to_string(),
        args,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_includes_result_count() {
        let invocation = invocation(&default_window(), 500);
        assert_eq!(
            invocation.command_line(),
            "fetch_podcasts.py --start_date 2018-01-01 --end_date 2023-01-01 --N 500"
        );
    }

    #[test]
    fn test_custom_count() {
        let invocation = invocation(&default_window(), 25);
        assert!(invocation.args.ends_with(&["--N".to_string(), "25".to_string()]));
    }
}
