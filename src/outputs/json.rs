//! JSON run-report output.
//!
//! This module serializes a completed run to JSON so later pipeline stages
//! (and humans doing provenance archaeology) can see exactly which fetcher
//! invocations a corpus snapshot came from.
//!
//! Files are organized by date with the run mode as the file name:
//! ```text
//! report_dir/
//! └── 2025-08-07/
//!     ├── full.json
//!     └── pilot.json
//! ```
//!
//! A second run of the same mode on the same day overwrites the first; the
//! report describes the latest attempt, not a history.

use crate::models::RunReport;
use std::error::Error;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write a [`RunReport`] to a JSON file with date-based directory structure.
///
/// Creates the necessary directory structure and writes the serialized
/// report. The file path is determined by the report's date and run mode.
///
/// # Arguments
///
/// * `report` - The completed run to serialize
/// * `report_dir` - Base directory for report output
///
/// # Returns
///
/// `Ok(())` on success, or an error if directory creation or file writing
/// fails.
///
/// # Output Path
///
/// The file is written to: `{report_dir}/{local_date}/{mode}.json`
#[instrument(level = "info", skip_all, fields(report_dir = %report_dir))]
pub async fn write_report(report: &RunReport, report_dir: &str) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string(report)?;

    let full_report_dir = format!("{}/{}", report_dir, report.local_date);
    info!(%full_report_dir, "Ensuring report directory exists");
    if let Err(e) = fs::create_dir_all(&full_report_dir).await {
        error!(%full_report_dir, error = %e, "Failed to create report dir");
        return Err(e.into());
    }

    let report_path = format!("{}/{}.json", full_report_dir, report.mode);
    info!(path = %report_path, "Writing run report");
    fs::write(&report_path, json).await?;
    info!(path = %report_path, "Wrote run report");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Invocation, StepOutcome};

    fn sample_report() -> RunReport {
        let invocation = Invocation {
            fetcher: "fiction".to_string(),
            program: "fetch_fiction.py".to_string(),
            args: vec!["--pilot".to_string()],
        };
        RunReport {
            mode: "pilot".to_string(),
            local_date: "2025-08-07".to_string(),
            local_time: "09:15:00".to_string(),
            succeeded: 1,
            failed: 0,
            duration_secs: 12,
            steps: vec![StepOutcome::completed(&invocation, Some(0), 12_000)],
        }
    }

    #[tokio::test]
    async fn test_write_report_creates_dated_file() {
        let base = std::env::temp_dir().join(format!("corpus_fetch_report_{}", std::process::id()));
        let base = base.to_str().unwrap().to_string();

        let report = sample_report();
        write_report(&report, &base).await.unwrap();

        let written = std::fs::read_to_string(format!("{base}/2025-08-07/pilot.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();

        assert_eq!(parsed["mode"], "pilot");
        assert_eq!(parsed["succeeded"], 1);
        assert_eq!(
            parsed["steps"][0]["command_line"],
            "fetch_fiction.py --pilot"
        );

        let _ = std::fs::remove_dir_all(&base);
    }
}
