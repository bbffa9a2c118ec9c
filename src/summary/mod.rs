//! Human-readable report summaries
//!
//! The summary trusts the statuses and percentages already stored in the
//! report; it only filters, ranks, and formats.

pub mod display;

use crate::compare::{Report, Status};
use crate::fmt::{format_count, format_pct, format_signed_count};
use std::cmp::Reverse;

/// A chunk with status warn or fail
#[derive(Debug, Clone, PartialEq)]
pub struct Offender {
    /// Chunk identity
    pub name: String,
    /// Warn or fail
    pub status: Status,
    /// Baseline size in bytes
    pub baseline_bytes: u64,
    /// Current size in bytes
    pub current_bytes: u64,
    /// Signed byte change
    pub delta_bytes: i128,
    /// Relative change as stored in the report
    pub delta_pct: f64,
}

impl Offender {
    /// `app.js: fail - 1,000 -> 1,300 (+300 bytes, 30.0%)`
    pub fn line(&self) -> String {
        format!(
            "{}: {} - {} -> {} ({} bytes, {})",
            self.name,
            self.status,
            format_count(self.baseline_bytes.into()),
            format_count(self.current_bytes.into()),
            format_signed_count(self.delta_bytes),
            format_pct(self.delta_pct)
        )
    }
}

/// Ranked overview of a report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    /// Overall report status
    pub status: Status,
    /// Baseline total bytes
    pub baseline_total: u64,
    /// Current total bytes
    pub current_total: u64,
    /// Signed total change
    pub delta_bytes: i128,
    /// Relative total change (0.0 for an empty baseline)
    pub delta_pct: f64,
    /// Warn/fail chunks, largest absolute byte change first, capped at the limit
    pub offenders: Vec<Offender>,
    /// Warn/fail chunks left out by the cap
    pub omitted: usize,
}

impl ReportSummary {
    /// Summarize `report`, keeping at most `limit` offenders
    ///
    /// # Examples
    ///
    /// ```
    /// use bundlesize::compare::SnapshotComparator;
    /// use bundlesize::snapshot::Snapshot;
    /// use bundlesize::summary::ReportSummary;
    /// use std::collections::BTreeMap;
    ///
    /// let baseline = Snapshot::from_chunks(BTreeMap::from([("app.js".to_string(), 1000)]));
    /// let current = Snapshot::from_chunks(BTreeMap::from([("app.js".to_string(), 1300)]));
    /// let report = SnapshotComparator::default().compare(&baseline, &current);
    ///
    /// let summary = ReportSummary::from_report(&report, 50);
    /// assert_eq!(summary.offenders.len(), 1);
    /// assert_eq!(summary.delta_bytes, 300);
    /// ```
    pub fn from_report(report: &Report, limit: usize) -> Self {
        let mut offenders: Vec<Offender> = report
            .chunks
            .iter()
            .filter(|(_, chunk)| chunk.status.is_offending())
            .map(|(name, chunk)| Offender {
                name: name.clone(),
                status: chunk.status,
                baseline_bytes: chunk.baseline_bytes,
                current_bytes: chunk.current_bytes,
                delta_bytes: chunk.delta_bytes(),
                delta_pct: chunk.delta_pct,
            })
            .collect();

        // Chunks arrive in name order and the sort is stable, so ties keep name order
        offenders.sort_by_key(|o| Reverse(o.delta_bytes.unsigned_abs()));

        let omitted = offenders.len().saturating_sub(limit);
        offenders.truncate(limit);

        Self {
            status: report.status,
            baseline_total: report.baseline.total_bytes,
            current_total: report.current.total_bytes,
            delta_bytes: report.total_delta_bytes(),
            delta_pct: report.total_delta_pct(),
            offenders,
            omitted,
        }
    }

    /// Plain-text rendering, one entry per line
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Overall status: {}", self.status),
            format!("Total baseline: {} bytes", format_count(self.baseline_total.into())),
            format!("Total current: {} bytes", format_count(self.current_total.into())),
            format!(
                "Total delta: {} bytes ({})",
                format_count(self.delta_bytes),
                format_pct(self.delta_pct)
            ),
            String::new(),
            "Failing/Warning chunks:".to_string(),
        ];

        lines.extend(self.offenders.iter().map(|o| format!("  {}", o.line())));
        if self.omitted > 0 {
            lines.push(format!("  ... and {} more", self.omitted));
        }
        lines
    }
}
