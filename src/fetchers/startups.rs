//! Startup corpus fetcher invocation.
//!
//! `fetch_startups.py` pulls product launches from Product Hunt one day at a
//! time and writes them as JSONL. Its window reaches further back than the
//! other corpora because the source thins out before 2017.

use crate::models::{DateWindow, Invocation};
use chrono::NaiveDate;

/// File name of the external program.
pub const PROGRAM: &str = "fetch_startups.py";

/// Historical window used by full runs.
pub fn default_window() -> DateWindow {
    DateWindow {
        start: NaiveDate::from_ymd_opt(2017, 1, 1).unwrap(),
        end: NaiveDate::from_ymd_opt(2023, 12, 1).unwrap(),
    }
}

/// Build the startups invocation for the given window.
pub fn invocation(window: &DateWindow, pilot: bool) -> Invocation {
    let mut args = window.cli_args();
    if pilot {
        args.push("--pilot".to_string());
    }
    Invocation {
        fetcher: "startups".to_string(),
        program: PROGRAM.to_string(),
        args,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_invocation() {
        let invocation = invocation(&default_window(), false);
        assert_eq!(
            invocation.command_line(),
            "fetch_startups.py --start_date 2017-01-01 --end_date 2023-12-01"
        );
    }

    #[test]
    fn test_pilot_invocation_forwards_flag() {
        let window = DateWindow {
            start: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
        };
        let invocation = invocation(&window, true);
        assert_eq!(
            invocation.command_line(),
            "fetch_startups.py --start_date 2023-01-01 --end_date 2023-02-01 --pilot"
        );
    }
}
