//! Chunk size snapshots
//!
//! A [`Snapshot`] maps every chunk identity found in a build output directory
//! to its total byte size. The same shape serves as the persisted baseline
//! and as the in-memory "current" side of a comparison.

pub mod builder;
pub mod normalize;
pub mod storage;

pub use builder::SnapshotBuilder;
pub use normalize::normalize;
pub use storage::BaselineStorage;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Chunk sizes captured from one build
///
/// Fields are declared in lexical order and chunks live in a `BTreeMap`, so
/// the serialized document has sorted keys at every level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Chunk identity -> accumulated bytes
    pub chunks: BTreeMap<String, u64>,
    /// ISO-8601 UTC timestamp of the scan
    pub generated_at: String,
    /// Sum of all chunk sizes
    pub total: u64,
}

impl Snapshot {
    /// Build a snapshot stamped with the current time
    pub fn from_chunks(chunks: BTreeMap<String, u64>) -> Self {
        Self::with_timestamp(chunks, current_timestamp())
    }

    /// Build a snapshot with an explicit `generatedAt` value
    pub fn with_timestamp(chunks: BTreeMap<String, u64>, generated_at: impl Into<String>) -> Self {
        let total = chunks.values().fold(0u64, |sum, &bytes| sum.saturating_add(bytes));
        Self {
            chunks,
            generated_at: generated_at.into(),
            total,
        }
    }

    /// Size of a chunk, 0 if absent
    pub fn size_of(&self, identity: &str) -> u64 {
        self.chunks.get(identity).copied().unwrap_or(0)
    }

    /// Sum of chunk sizes as recorded, independent of `total`
    ///
    /// `None` if the sum does not fit in a `u64`.
    pub fn chunk_sum(&self) -> Option<u64> {
        self.chunks
            .values()
            .try_fold(0u64, |sum, &bytes| sum.checked_add(bytes))
    }
}

/// Current time as ISO-8601 UTC with a `Z` suffix
pub fn current_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
