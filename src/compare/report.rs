//! Comparison report document

use super::classifier::{Delta, Status};
use crate::document::{load_json, save_json};
use crate::error::{BundleSizeError, DocumentKind};
use crate::infra::{FileSystem, RealFileSystem};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Result of comparing a baseline snapshot with a current one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Most severe of all chunk statuses and the total's status
    pub status: Status,
    /// Baseline totals
    pub baseline: TotalSize,
    /// Current totals
    pub current: TotalSize,
    /// Per-chunk results keyed by chunk identity
    pub chunks: BTreeMap<String, ChunkResult>,
}

/// Total bytes on one side of a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalSize {
    /// Sum of all chunk sizes
    pub total_bytes: u64,
}

/// Classification of a single chunk
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkResult {
    /// Severity of this chunk's change
    pub status: Status,
    /// Size in the baseline (0 for new chunks)
    pub baseline_bytes: u64,
    /// Size in the current build (0 for removed chunks)
    pub current_bytes: u64,
    /// Relative change; +1.0 for new chunks, -1.0 for removed ones
    pub delta_pct: f64,
}

impl ChunkResult {
    /// Signed byte change
    pub fn delta_bytes(&self) -> i128 {
        Delta::new(self.baseline_bytes, self.current_bytes).bytes()
    }
}

impl Report {
    /// Signed change of the total size
    pub fn total_delta_bytes(&self) -> i128 {
        self.total_delta().bytes()
    }

    /// Relative change of the total size; 0.0 when the baseline total is 0
    pub fn total_delta_pct(&self) -> f64 {
        self.total_delta().ratio().unwrap_or(0.0)
    }

    fn total_delta(&self) -> Delta {
        Delta::new(self.baseline.total_bytes, self.current.total_bytes)
    }

    /// Load a report document
    pub fn load(path: &Path) -> Result<Self, BundleSizeError> {
        Self::load_with_fs(path, &RealFileSystem)
    }

    /// Load a report document with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(path: &Path, fs: &FS) -> Result<Self, BundleSizeError> {
        load_json(fs, path, DocumentKind::Report)
    }

    /// Write the report document, replacing any previous one
    pub fn save(&self, path: &Path) -> Result<(), BundleSizeError> {
        self.save_with_fs(path, &RealFileSystem)
    }

    /// Write the report document with a custom filesystem implementation
    pub fn save_with_fs<FS: FileSystem>(&self, path: &Path, fs: &FS) -> Result<(), BundleSizeError> {
        save_json(fs, path, self)?;
        log::info!("saved report to {}", path.display());
        Ok(())
    }
}
