//! Summary command implementation
//!
//! Handles the `bundlesize summary` command which reads a previously written
//! report and prints the overall status and the largest offending chunks.
//! Every failure is reduced to a single printed line.

use anyhow::Result;
use std::path::Path;

use crate::compare::Report;
use crate::error::ErrorFormatter;
use crate::summary::{display, ReportSummary};

/// Load the report at `report_path` and summarize it
pub fn summarize(report_path: &Path, limit: usize) -> Result<ReportSummary> {
    let report = Report::load(report_path)?;
    Ok(ReportSummary::from_report(&report, limit))
}

/// Print a summary of the report at `report_path`
///
/// Returns the process exit code: 0 on success, otherwise the code for the
/// error that was reported.
///
/// # Examples
///
/// ```no_run
/// use bundlesize::cmd::summary::cmd_summary;
/// use std::path::Path;
///
/// let code = cmd_summary(Path::new(".bundlesize.report.json"), 50);
/// std::process::exit(code);
/// ```
pub fn cmd_summary(report_path: &Path, limit: usize) -> i32 {
    match summarize(report_path, limit) {
        Ok(summary) => {
            display::print_summary(&summary);
            0
        }
        Err(e) => {
            println!("Error reading report: {:#}", e);
            ErrorFormatter::exit_code(&e)
        }
    }
}
