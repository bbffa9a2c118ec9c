//! Baseline/current snapshot comparison
//!
//! The comparator joins two snapshots on chunk identity, classifies every
//! chunk delta and the total delta against configured thresholds, and
//! produces a [`Report`]. Classification is a pure function of the two
//! snapshots and the thresholds.

mod classifier;
mod comparator;
mod report;

pub use classifier::{classify, classify_change, Delta, Status, NEW_CHUNK_DELTA_PCT};
pub use comparator::SnapshotComparator;
pub use report::{ChunkResult, Report, TotalSize};
