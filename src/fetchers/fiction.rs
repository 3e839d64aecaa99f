//! Fiction corpus fetcher invocation.
//!
//! `fetch_fiction.py` scrapes FictionDB's monthly new-release listings and
//! writes one JSONL record per book. Pagination is the script's own business
//! (month by month, with an internal page cap); the runner only hands it a
//! date window.

use crate::models::{DateWindow, Invocation};
use chrono::NaiveDate;

/// File name of the external program.
pub const PROGRAM: &str = "fetch_fiction.py";

/// Historical window used by full runs.
pub fn default_window() -> DateWindow {
    DateWindow {
        start: NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
        end: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
    }
}

/// Build the fiction invocation for the given window.
pub fn invocation(window: &DateWindow, pilot: bool) -> Invocation {
    let mut args = window.cli_args();
    if pilot {
        args.push("--pilot".to_string());
    }
    Invocation {
        fetcher: "fiction".to_string(),
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
            "fetch_fiction.py --start_date 2018-01-01 --end_date 2023-01-01"
        );
    }

    #[test]
    fn test_pilot_flag_is_last() {
        let invocation = invocation(&default_window(), true);
        assert_eq!(invocation.args.last().map(String::as_str), Some("--pilot"));
    }
}
