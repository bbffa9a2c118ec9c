//! Infrastructure traits for abstracting I/O operations.
//!
//! Snapshot scanning and document persistence go through [`FileSystem`] so
//! they can be exercised against alternative implementations in tests.

use std::fs::{Metadata, ReadDir};
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Trait for abstracting filesystem operations.
pub trait FileSystem {
    /// Create a directory and all missing parent directories.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Read the contents of a directory.
    fn read_dir(&self, path: &Path) -> io::Result<ReadDir>;

    /// Get metadata for a file or directory, following symlinks.
    fn metadata(&self, path: &Path) -> io::Result<Metadata>;

    /// Read the entire contents of a file into a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write a slice of bytes to a file.
    fn write(&self, path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()>;

    /// Replace `path` with `contents` as a single unit.
    ///
    /// Readers observe either the previous document or the complete new one,
    /// never a partial write. Missing parent directories are created.
    fn write_atomic(&self, path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()>;
}

/// Real filesystem implementation that delegates to std::fs.
#[derive(Debug, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<ReadDir> {
        std::fs::read_dir(path)
    }

    fn metadata(&self, path: &Path) -> io::Result<Metadata> {
        std::fs::metadata(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
        std::fs::write(path, contents)
    }

    fn write_atomic(&self, path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir)?;

        // Uniquely named sibling; removed on drop if anything below fails
        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(contents.as_ref())?;
        temp.flush()?;
        temp.as_file_mut().sync_all()?;
        temp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn test_real_filesystem_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        let fs = RealFileSystem;
        fs.write(&file_path, b"Hello, World!").unwrap();

        let read_content = fs.read_to_string(&file_path).unwrap();
        assert_eq!(read_content, "Hello, World!");
    }

    fn dir_entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_write_atomic_replaces_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("baseline.json");

        let fs = RealFileSystem;
        fs.write(&file_path, b"old content that is longer").unwrap();
        fs.write_atomic(&file_path, b"new").unwrap();

        assert_eq!(fs.read_to_string(&file_path).unwrap(), "new");
        assert_eq!(dir_entries(temp_dir.path()), vec!["baseline.json"]);
    }

    #[test]
    fn test_write_atomic_ignores_stale_fixed_name_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("report.json");
        // A leftover at a predictable temp name must be neither reused nor clobbered
        let stale = temp_dir.path().join(".report.json.tmp");
        std::fs::write(&stale, b"someone else's data").unwrap();

        RealFileSystem.write_atomic(&file_path, b"{}").unwrap();
        RealFileSystem.write_atomic(&file_path, b"{\"v\":2}").unwrap();

        assert_eq!(std::fs::read_to_string(&file_path).unwrap(), "{\"v\":2}");
        assert_eq!(std::fs::read_to_string(&stale).unwrap(), "someone else's data");
        assert_eq!(dir_entries(temp_dir.path()), vec![".report.json.tmp", "report.json"]);
    }

    #[test]
    fn test_write_atomic_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("a").join("b").join("report.json");

        RealFileSystem.write_atomic(&file_path, b"{}").unwrap();

        assert!(file_path.is_file());
    }

    #[test]
    fn test_write_atomic_failure_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        // Destination is an existing non-empty directory, so the rename fails
        let target = temp_dir.path().join("occupied");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("keep"), b"x").unwrap();

        let result = RealFileSystem.write_atomic(&target, b"data");

        assert!(result.is_err());
        assert_eq!(dir_entries(temp_dir.path()), vec!["occupied"]);
        assert!(target.join("keep").exists());
    }

    #[test]
    fn test_real_filesystem_metadata() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        let fs = RealFileSystem;
        fs.write(&file_path, b"content").unwrap();

        let metadata = fs.metadata(&file_path).unwrap();
        assert!(metadata.is_file());
        assert_eq!(metadata.len(), 7);
    }

    #[test]
    fn test_real_filesystem_read_nonexistent_file_returns_error() {
        let fs = RealFileSystem;
        let result = fs.read_to_string(Path::new("/nonexistent/file.txt"));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
