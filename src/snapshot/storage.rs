//! Baseline snapshot persistence (I/O)

use super::Snapshot;
use crate::document::{load_json, save_json};
use crate::error::{BundleSizeError, DocumentKind};
use crate::infra::{FileSystem, RealFileSystem};
use std::path::{Path, PathBuf};

/// Reads and writes the baseline document
///
/// The baseline is replaced wholesale on every save; there is no merging
/// with a previous baseline.
pub struct BaselineStorage<FS: FileSystem = RealFileSystem> {
    path: PathBuf,
    fs: FS,
}

impl BaselineStorage<RealFileSystem> {
    /// Create storage for the baseline at `path` on the real filesystem
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_fs(path, RealFileSystem)
    }
}

impl<FS: FileSystem> BaselineStorage<FS> {
    /// Create storage with a custom filesystem implementation
    pub fn with_fs(path: impl Into<PathBuf>, fs: FS) -> Self {
        Self {
            path: path.into(),
            fs,
        }
    }

    /// Location of the baseline document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the baseline
    ///
    /// A document whose `total` disagrees with its chunks is rejected as
    /// malformed.
    pub fn load(&self) -> Result<Snapshot, BundleSizeError> {
        let snapshot: Snapshot = load_json(&self.fs, &self.path, DocumentKind::Baseline)?;

        let reason = match snapshot.chunk_sum() {
            Some(sum) if sum == snapshot.total => return Ok(snapshot),
            Some(sum) => format!(
                "total {} does not match the sum of chunk sizes {}",
                snapshot.total, sum
            ),
            None => "chunk sizes add up to more than 2^64 bytes".to_string(),
        };

        Err(BundleSizeError::MalformedDocument {
            kind: DocumentKind::Baseline,
            path: self.path.clone(),
            reason,
        })
    }

    /// Save a new baseline, replacing any previous one
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), BundleSizeError> {
        save_json(&self.fs, &self.path, snapshot)?;
        log::info!("saved baseline to {}", self.path.display());
        Ok(())
    }
}
