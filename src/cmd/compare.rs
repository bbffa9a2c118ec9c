//! Compare command implementation
//!
//! Handles the `bundlesize compare` command which scans the current build
//! output, compares it with the stored baseline, and writes the report.
//! The command reports regressions but never fails because of them.

use anyhow::Result;
use std::path::Path;

use crate::compare::{Report, SnapshotComparator};
use crate::config::{ConfigFile, Thresholds};
use crate::error::BundleSizeError;
use crate::snapshot::{BaselineStorage, SnapshotBuilder};
use crate::summary::{display, ReportSummary};

/// Scan the current build, compare it with the baseline, and persist the report
///
/// # Errors
///
/// - [`BundleSizeError::MissingInput`] if `assets_dir` does not exist
/// - [`BundleSizeError::DocumentNotFound`] if no baseline has been recorded
/// - [`BundleSizeError::MalformedDocument`] if the baseline cannot be parsed
pub fn generate_report<S: AsRef<str>>(
    assets_dir: &Path,
    baseline_path: &Path,
    report_path: &Path,
    extensions: &[S],
    thresholds: Thresholds,
) -> Result<Report, BundleSizeError> {
    let current = SnapshotBuilder::new(extensions).scan(assets_dir)?;
    let baseline = BaselineStorage::new(baseline_path).load()?;

    let report = SnapshotComparator::new(thresholds).compare(&baseline, &current);
    report.save(report_path)?;
    Ok(report)
}

/// Compare the configured build output against the baseline
///
/// Prints the summary, or the report document itself when `json_output` is set.
///
/// # Examples
///
/// ```no_run
/// use bundlesize::cmd::compare::cmd_compare;
/// use bundlesize::config::ConfigFile;
///
/// cmd_compare(&ConfigFile::default(), false)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_compare(config: &ConfigFile, json_output: bool) -> Result<()> {
    let report = generate_report(
        &config.assets_dir,
        &config.baseline_path,
        &config.report_path,
        &config.extensions,
        config.thresholds,
    )?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display::print_summary(&ReportSummary::from_report(&report, config.summary_limit));
    }

    Ok(())
}
