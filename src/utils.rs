//! Utility functions for date arithmetic and file system checks.

use chrono::{Datelike, NaiveDate};
use std::error::Error;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument};

/// Count the calendar months a half-open window touches.
///
/// The fetchers paginate month by month, so this is the number of page
/// groups a window produces. `end` is exclusive: a window from the first of
/// one month to the first of the next touches exactly one month.
///
/// # Examples
///
/// ```ignore
/// // The pilot window
/// assert_eq!(months_between(ymd(2023, 1, 1), ymd(2023, 2, 1)), 1);
/// // The full fiction window
/// assert_eq!(months_between(ymd(2018, 1, 1), ymd(2023, 1, 1)), 60);
/// ```
pub fn months_between(start: NaiveDate, end: NaiveDate) -> u32 {
    if end <= start {
        return 0;
    }
    let last = end.pred_opt().unwrap();
    ((last.year() - start.year()) * 12 + last.month() as i32 - start.month() as i32 + 1) as u32
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if it doesn't exist, then performs a write test by
/// creating and immediately deleting a probe file.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or is not writable
/// (permission denied, read-only filesystem, etc.).
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    if let Err(e) = fs::create_dir_all(path).await {
        return Err(Box::new(e));
    }
    // Small sync probe write; std fs keeps the error surface simple.
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Report directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}
