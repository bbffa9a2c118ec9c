//! Snapshot comparison logic

use super::classifier::{classify, classify_change, Delta, Status};
use super::report::{ChunkResult, Report, TotalSize};
use crate::config::Thresholds;
use crate::snapshot::Snapshot;
use std::collections::BTreeMap;

/// Compares a current snapshot against a baseline
#[derive(Debug, Clone)]
pub struct SnapshotComparator {
    thresholds: Thresholds,
}

impl SnapshotComparator {
    /// Create a comparator with the given thresholds
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Create with the default thresholds
    pub fn with_default_thresholds() -> Self {
        Self::new(Thresholds::default())
    }

    /// Compare `current` against `baseline`
    ///
    /// Every identity from either side appears in the report. Chunks missing
    /// from the baseline are new (baseline 0); chunks missing from the
    /// current build are removed (current 0). The overall status is the most
    /// severe chunk status, escalated further if the total delta breaches the
    /// total thresholds on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundlesize::compare::{SnapshotComparator, Status};
    /// use bundlesize::snapshot::Snapshot;
    /// use std::collections::BTreeMap;
    ///
    /// let baseline = Snapshot::from_chunks(BTreeMap::from([("app.js".to_string(), 1000)]));
    /// let current = Snapshot::from_chunks(BTreeMap::from([("app.js".to_string(), 1300)]));
    ///
    /// let report = SnapshotComparator::with_default_thresholds().compare(&baseline, &current);
    /// assert_eq!(report.status, Status::Fail);
    /// assert_eq!(report.chunks["app.js"].baseline_bytes, 1000);
    /// ```
    pub fn compare(&self, baseline: &Snapshot, current: &Snapshot) -> Report {
        let mut chunks = BTreeMap::new();

        let identities = baseline.chunks.keys().chain(current.chunks.keys());
        for identity in identities {
            if chunks.contains_key(identity) {
                continue;
            }
            let delta = Delta::new(baseline.size_of(identity), current.size_of(identity));
            chunks.insert(identity.clone(), self.classify_chunk(delta));
        }

        let worst_chunk = chunks
            .values()
            .map(|chunk: &ChunkResult| chunk.status)
            .max()
            .unwrap_or(Status::Pass);

        // An empty baseline has nothing to grow from, so the total reports 0%
        let total = Delta::new(baseline.total, current.total);
        let total_status = classify_change(
            &self.thresholds.total,
            total.bytes(),
            total.ratio().unwrap_or(0.0),
        );
        if total_status > worst_chunk {
            log::info!(
                "total delta escalates status from {} to {}",
                worst_chunk,
                total_status
            );
        }

        Report {
            status: worst_chunk.max(total_status),
            baseline: TotalSize {
                total_bytes: baseline.total,
            },
            current: TotalSize {
                total_bytes: current.total,
            },
            chunks,
        }
    }

    fn classify_chunk(&self, delta: Delta) -> ChunkResult {
        ChunkResult {
            status: classify(&self.thresholds.chunk, delta),
            baseline_bytes: delta.baseline,
            current_bytes: delta.current,
            delta_pct: delta.pct(),
        }
    }
}

impl Default for SnapshotComparator {
    fn default() -> Self {
        Self::with_default_thresholds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::NEW_CHUNK_DELTA_PCT;
    use crate::config::ThresholdSet;

    fn snapshot(chunks: &[(&str, u64)]) -> Snapshot {
        Snapshot::with_timestamp(
            chunks
                .iter()
                .map(|(name, bytes)| (name.to_string(), *bytes))
                .collect(),
            "2024-01-01T00:00:00.000000Z",
        )
    }

    fn chunk_only(warn_pct: f64, fail_pct: f64) -> Thresholds {
        Thresholds {
            chunk: ThresholdSet {
                warn_pct: Some(warn_pct),
                fail_pct: Some(fail_pct),
                ..ThresholdSet::default()
            },
            total: ThresholdSet::default(),
        }
    }

    #[test]
    fn test_thirty_percent_chunk_growth_fails() {
        let comparator = SnapshotComparator::new(chunk_only(0.10, 0.25));
        let report = comparator.compare(&snapshot(&[("app.js", 1000)]), &snapshot(&[("app.js", 1300)]));

        let app = &report.chunks["app.js"];
        assert_eq!(app.status, Status::Fail);
        assert!((app.delta_pct - 0.30).abs() < 1e-9);
        assert_eq!(report.status, Status::Fail);
    }

    #[test]
    fn test_new_chunk_is_classified_as_full_growth() {
        let comparator = SnapshotComparator::new(chunk_only(0.10, 0.25));
        let report = comparator.compare(
            &snapshot(&[("app.js", 1000)]),
            &snapshot(&[("app.js", 1000), ("huge.js", 5_000_000)]),
        );

        let huge = &report.chunks["huge.js"];
        assert_eq!(huge.baseline_bytes, 0);
        assert_eq!(huge.current_bytes, 5_000_000);
        assert_eq!(huge.delta_pct, NEW_CHUNK_DELTA_PCT);
        // Reported +100% is also what gets classified against the 25% fail limit
        assert_eq!(huge.status, Status::Fail);
        assert_eq!(report.status, Status::Fail);
    }

    #[test]
    fn test_new_chunk_under_lenient_limits_passes() {
        let comparator = SnapshotComparator::new(chunk_only(1.0, 2.0));
        let report = comparator.compare(&snapshot(&[]), &snapshot(&[("lazy.js", 500)]));

        assert_eq!(report.chunks["lazy.js"].status, Status::Pass);
    }

    #[test]
    fn test_new_chunk_over_byte_limit_warns() {
        let thresholds = Thresholds {
            chunk: ThresholdSet {
                warn_pct: Some(1.0),
                fail_pct: Some(2.0),
                warn_bytes: Some(100),
                fail_bytes: Some(10_000),
            },
            total: ThresholdSet::default(),
        };
        let report = SnapshotComparator::new(thresholds)
            .compare(&snapshot(&[]), &snapshot(&[("lazy.js", 500)]));

        assert_eq!(report.chunks["lazy.js"].status, Status::Warn);
        assert_eq!(report.status, Status::Warn);
    }

    #[test]
    fn test_removed_chunk_passes_with_negative_delta() {
        let report = SnapshotComparator::default().compare(
            &snapshot(&[("app.js", 1000), ("legacy.js", 400)]),
            &snapshot(&[("app.js", 1000)]),
        );

        let legacy = &report.chunks["legacy.js"];
        assert_eq!(legacy.current_bytes, 0);
        assert_eq!(legacy.delta_pct, -1.0);
        assert_eq!(legacy.status, Status::Pass);
        assert_eq!(report.status, Status::Pass);
    }

    #[test]
    fn test_report_contains_union_of_identities() {
        let report = SnapshotComparator::default().compare(
            &snapshot(&[("a.js", 1), ("b.js", 2)]),
            &snapshot(&[("b.js", 2), ("c.js", 3)]),
        );

        let names: Vec<_> = report.chunks.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["a.js", "b.js", "c.js"]);
        assert_eq!(report.baseline.total_bytes, 3);
        assert_eq!(report.current.total_bytes, 5);
    }

    #[test]
    fn test_overall_status_is_most_severe_chunk() {
        let comparator = SnapshotComparator::new(chunk_only(0.10, 0.25));
        let report = comparator.compare(
            &snapshot(&[("a.js", 1000), ("b.js", 1000), ("c.js", 1000)]),
            &snapshot(&[("a.js", 1000), ("b.js", 1150), ("c.js", 900)]),
        );

        assert_eq!(report.chunks["a.js"].status, Status::Pass);
        assert_eq!(report.chunks["b.js"].status, Status::Warn);
        assert_eq!(report.chunks["c.js"].status, Status::Pass);
        assert_eq!(report.status, Status::Warn);
    }

    #[test]
    fn test_total_growth_escalates_when_no_chunk_breaches() {
        // Every chunk grows 8%: under the 10% chunk warn limit, but the
        // total grows past the 5% total warn limit
        let thresholds = Thresholds::default();
        let baseline: Vec<_> = (0..10).map(|i| (format!("c{}.js", i), 1000u64)).collect();
        let current: Vec<_> = (0..10).map(|i| (format!("c{}.js", i), 1080u64)).collect();
        let as_refs = |v: &[(String, u64)]| -> Snapshot {
            snapshot(&v.iter().map(|(n, b)| (n.as_str(), *b)).collect::<Vec<_>>())
        };

        let report = SnapshotComparator::new(thresholds).compare(&as_refs(&baseline), &as_refs(&current));

        assert!(report.chunks.values().all(|c| c.status == Status::Pass));
        assert_eq!(report.status, Status::Warn);
    }

    #[test]
    fn test_zero_baseline_total_does_not_escalate_by_percentage() {
        let thresholds = Thresholds {
            chunk: ThresholdSet::default(),
            total: ThresholdSet::TOTAL_DEFAULT,
        };
        let report = SnapshotComparator::new(thresholds)
            .compare(&snapshot(&[]), &snapshot(&[("app.js", 10_000)]));

        assert_eq!(report.total_delta_pct(), 0.0);
        assert_eq!(report.status, Status::Pass);
    }

    #[test]
    fn test_identical_snapshots_pass() {
        let snap = snapshot(&[("app.js", 1000), ("app.css", 200)]);
        let report = SnapshotComparator::default().compare(&snap, &snap);

        assert_eq!(report.status, Status::Pass);
        assert!(report.chunks.values().all(|c| c.delta_pct == 0.0));
    }

    #[test]
    fn test_comparison_is_deterministic() {
        let comparator = SnapshotComparator::default();
        let baseline = snapshot(&[("a.js", 100), ("b.js", 300)]);
        let current = snapshot(&[("a.js", 180), ("c.js", 40)]);

        assert_eq!(
            comparator.compare(&baseline, &current),
            comparator.compare(&baseline, &current)
        );
    }
}
