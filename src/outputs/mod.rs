//! Output generation for run reports.
//!
//! The fetchers own their corpus files; the only artifact the runner itself
//! produces is an optional JSON report describing what was invoked and how
//! each invocation ended.
//!
//! # Output Structure
//!
//! ```text
//! report_dir/
//! ├── 2025-08-07/
//! │   ├── full.json
//! │   └── pilot.json
//! ```

pub mod json;
