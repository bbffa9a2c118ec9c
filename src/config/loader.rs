//! Configuration file loading

use super::file::{ConfigFile, CONFIG_FILE_NAME};
use crate::error::{BundleSizeError, DocumentKind};
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::{Context, Result};
use std::path::Path;

/// Handles loading configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from .bundlesize.toml in the given directory
    ///
    /// A missing file yields [`ConfigFile::default`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use bundlesize::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("."))?;
    /// println!("Scanning {}", config.assets_dir.display());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(project_root: &Path) -> Result<ConfigFile> {
        Self::load_with_fs(project_root, &RealFileSystem)
    }

    /// Load config with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(project_root: &Path, fs: &FS) -> Result<ConfigFile> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        // Read file atomically - no TOCTOU race window
        let contents = match fs.read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no {} found, using defaults", config_path.display());
                return Ok(ConfigFile::default());
            }
            Err(e) => {
                return Err(e).context("Failed to read .bundlesize.toml");
            }
        };

        Self::parse(&contents, &config_path)
    }

    /// Load config from an explicit path; unlike [`ConfigLoader::load`] the file must exist
    pub fn load_from(config_path: &Path) -> Result<ConfigFile> {
        Self::load_from_with_fs(config_path, &RealFileSystem)
    }

    /// Load config from an explicit path with a custom filesystem implementation
    pub fn load_from_with_fs<FS: FileSystem>(config_path: &Path, fs: &FS) -> Result<ConfigFile> {
        let contents = match fs.read_to_string(config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(BundleSizeError::DocumentNotFound {
                    kind: DocumentKind::Config,
                    path: config_path.to_path_buf(),
                }
                .into());
            }
            Err(e) => {
                return Err(BundleSizeError::Io {
                    context: format!("reading {}", config_path.display()),
                    source: e,
                }
                .into());
            }
        };

        Self::parse(&contents, config_path)
    }

    fn parse(contents: &str, config_path: &Path) -> Result<ConfigFile> {
        let mut config: ConfigFile =
            toml_edit::de::from_str(contents).map_err(|e| BundleSizeError::MalformedDocument {
                kind: DocumentKind::Config,
                path: config_path.to_path_buf(),
                reason: e.to_string(),
            })?;

        config.thresholds = config.thresholds.with_defaults();
        config.thresholds.validate()?;

        log::debug!("loaded config from {}", config_path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThresholdSet;
    use std::fs;
    use std::io;
    use std::path::PathBuf;
    use tempfile::TempDir;

    // Mock FileSystem for testing read failures
    struct MockFileSystem {
        error_kind: io::ErrorKind,
    }

    impl FileSystem for MockFileSystem {
        fn read_to_string(&self, _path: &Path) -> io::Result<String> {
            Err(io::Error::new(self.error_kind, "mock failure"))
        }

        fn write(&self, _path: &Path, _contents: impl AsRef<[u8]>) -> io::Result<()> {
            unimplemented!()
        }

        fn metadata(&self, _path: &Path) -> io::Result<std::fs::Metadata> {
            unimplemented!()
        }

        fn read_dir(&self, _path: &Path) -> io::Result<std::fs::ReadDir> {
            unimplemented!()
        }

        fn create_dir_all(&self, _path: &Path) -> io::Result<()> {
            unimplemented!()
        }

        fn write_atomic(&self, _path: &Path, _contents: impl AsRef<[u8]>) -> io::Result<()> {
            unimplemented!()
        }
    }

    #[test]
    fn test_loader_loads_from_valid_toml() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            r#"
assets-dir = "out"

[thresholds.chunk]
warn-pct = 0.02
"#,
        )
        .unwrap();

        let config = ConfigLoader::load(temp.path()).unwrap();
        assert_eq!(config.assets_dir, PathBuf::from("out"));
        assert_eq!(config.thresholds.chunk.warn_pct, Some(0.02));
        // Unset limits are filled from defaults
        assert_eq!(config.thresholds.chunk.fail_pct, Some(0.25));
    }

    #[test]
    fn test_loader_with_missing_file_returns_default() {
        let temp = TempDir::new().unwrap();

        let config = ConfigLoader::load(temp.path()).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_loader_with_invalid_toml_returns_malformed_error() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[invalid toml\nthis is broken",
        )
        .unwrap();

        let err = ConfigLoader::load(temp.path()).unwrap_err();
        let bs = err.downcast_ref::<BundleSizeError>().unwrap();
        assert!(matches!(
            bs,
            BundleSizeError::MalformedDocument {
                kind: DocumentKind::Config,
                ..
            }
        ));
    }

    #[test]
    fn test_loader_rejects_inverted_thresholds() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[thresholds.total]\nwarn-pct = 0.5\nfail-pct = 0.1\n",
        )
        .unwrap();

        let err = ConfigLoader::load(temp.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BundleSizeError>(),
            Some(BundleSizeError::InvalidThresholds { .. })
        ));
    }

    #[test]
    fn test_loader_rejects_warn_default_above_user_fail() {
        // fail-pct below the default warn-pct of 10% is inconsistent once filled
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[thresholds.chunk]\nfail-pct = 0.05\n",
        )
        .unwrap();

        assert!(ConfigLoader::load(temp.path()).is_err());
    }

    #[test]
    fn test_loader_propagates_permission_errors() {
        let fs = MockFileSystem {
            error_kind: io::ErrorKind::PermissionDenied,
        };

        let err = ConfigLoader::load_with_fs(Path::new("."), &fs).unwrap_err();
        assert!(err.to_string().contains("Failed to read .bundlesize.toml"));
    }

    #[test]
    fn test_load_from_requires_existing_file() {
        let fs = MockFileSystem {
            error_kind: io::ErrorKind::NotFound,
        };

        let err = ConfigLoader::load_from_with_fs(Path::new("custom.toml"), &fs).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BundleSizeError>(),
            Some(BundleSizeError::DocumentNotFound {
                kind: DocumentKind::Config,
                ..
            })
        ));
    }

    #[test]
    fn test_load_from_reads_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ci.toml");
        fs::write(&path, "summary-limit = 5\n").unwrap();

        let config = ConfigLoader::load_from(&path).unwrap();
        assert_eq!(config.summary_limit, 5);
        assert_eq!(config.thresholds.chunk, ThresholdSet::CHUNK_DEFAULT);
    }
}
