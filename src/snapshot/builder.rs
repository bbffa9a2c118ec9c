//! Build output scanning

use super::normalize::normalize;
use super::Snapshot;
use crate::error::BundleSizeError;
use crate::infra::{FileSystem, RealFileSystem};
use std::collections::BTreeMap;
use std::io;
use std::path::Path;

/// Scans a build output directory into a [`Snapshot`]
///
/// Only direct children are considered: subdirectories are skipped, as are
/// files whose names do not end in a tracked extension.
pub struct SnapshotBuilder<FS: FileSystem = RealFileSystem> {
    /// Tracked suffixes including the dot, e.g. `.js`
    suffixes: Vec<String>,
    fs: FS,
}

impl SnapshotBuilder<RealFileSystem> {
    /// Create a builder tracking the given extensions on the real filesystem
    ///
    /// Extensions may be given with or without a leading dot.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_fs(extensions, RealFileSystem)
    }
}

impl<FS: FileSystem> SnapshotBuilder<FS> {
    /// Create a builder with a custom filesystem implementation
    pub fn with_fs<I, S>(extensions: I, fs: FS) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let suffixes = extensions
            .into_iter()
            .map(|ext| format!(".{}", ext.as_ref().trim_start_matches('.')))
            .collect();
        Self { suffixes, fs }
    }

    /// Whether a filename carries one of the tracked extensions
    pub fn is_tracked(&self, file_name: &str) -> bool {
        self.suffixes
            .iter()
            .any(|suffix| file_name.ends_with(suffix.as_str()))
    }

    /// Scan `dir` and aggregate sizes per chunk identity
    ///
    /// Files that normalize to the same identity have their sizes summed.
    ///
    /// # Errors
    ///
    /// - [`BundleSizeError::MissingInput`] if `dir` does not exist or is not a directory
    /// - [`BundleSizeError::Io`] if the directory or a file's metadata cannot be read
    pub fn scan(&self, dir: &Path) -> Result<Snapshot, BundleSizeError> {
        match self.fs.metadata(dir) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(BundleSizeError::MissingInput {
                    path: dir.to_path_buf(),
                })
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(BundleSizeError::MissingInput {
                    path: dir.to_path_buf(),
                })
            }
            Err(e) => return Err(io_error(dir, e)),
        }

        let entries = self.fs.read_dir(dir).map_err(|e| io_error(dir, e))?;

        let mut chunks: BTreeMap<String, u64> = BTreeMap::new();
        for entry in entries {
            let entry = entry.map_err(|e| io_error(dir, e))?;
            let path = entry.path();

            let Some(file_name) = entry.file_name().to_str().map(str::to_owned) else {
                log::debug!("skipping non UTF-8 filename {}", path.display());
                continue;
            };

            if !self.is_tracked(&file_name) {
                log::trace!("skipping untracked {}", file_name);
                continue;
            }

            let meta = self.fs.metadata(&path).map_err(|e| io_error(&path, e))?;
            if !meta.is_file() {
                log::debug!("skipping non-file entry {}", file_name);
                continue;
            }

            let identity = normalize(&file_name);
            log::debug!("{} -> {} ({} bytes)", file_name, identity, meta.len());
            let size = chunks.entry(identity).or_insert(0);
            *size = size.saturating_add(meta.len());
        }

        log::info!("scanned {} chunks in {}", chunks.len(), dir.display());
        Ok(Snapshot::from_chunks(chunks))
    }
}

fn io_error(path: &Path, source: io::Error) -> BundleSizeError {
    BundleSizeError::Io {
        context: format!("scanning {}", path.display()),
        source,
    }
}
