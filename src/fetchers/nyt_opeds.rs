//! NYT op-ed fetcher invocation.
//!
//! `fetch_nyt_opeds.py` collects op-ed headline metadata from the New York
//! Times archive API (titles and abstracts only, never full text). The
//! script reads its API key from its own `secrets.json`; the runner passes
//! nothing but the window and the pilot flag.

use crate::models::{DateWindow, Invocation};
use chrono::NaiveDate;

/// File name of the external program.
pub const PROGRAM: &str = "fetch_nyt_opeds.py";

/// Historical window used by full runs.
pub fn default_window() -> DateWindow {
    DateWindow {
        start: NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
        end: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
    }
}

/// Build the op-ed invocation for the given window.
pub fn invocation(window: &DateWindow, pilot: bool) -> Invocation {
    let mut args = window.cli_args();
    if pilot {
        args.push("--pilot".to_string());
    }
    Invocation {
        fetcher: "nyt_opeds".to_string(),
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
            "fetch_nyt_opeds.py --start_date 2018-01-01 --end_date 2023-01-01"
        );
    }

    #[test]
    fn test_pilot_invocation() {
        let window = DateWindow {
            start: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
        };
        assert_eq!(
            invocation(&window, true).command_line(),
            "fetch_nyt_opeds.py --start_date 2023-01-01 --end_date 2023-02-01 --pilot"
        );
    }
}
