//! Configuration file data structures

use super::thresholds::Thresholds;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".bundlesize.toml";

/// Default build output directory
pub const DEFAULT_ASSETS_DIR: &str = "dist/assets";

/// Default baseline document path
pub const DEFAULT_BASELINE_PATH: &str = ".bundlesize.baseline.json";

/// Default report document path
pub const DEFAULT_REPORT_PATH: &str = ".bundlesize.report.json";

/// Default number of offending chunks listed by the summary
pub const DEFAULT_SUMMARY_LIMIT: usize = 50;

/// bundlesize configuration file structure
///
/// Every key is optional; missing keys fall back to the defaults above.
///
/// ```toml
/// assets-dir = "dist/assets"
/// extensions = ["js", "css"]
///
/// [thresholds.chunk]
/// warn-pct = 0.10
/// fail-pct = 0.25
/// fail-bytes = 51200
///
/// [thresholds.total]
/// warn-pct = 0.05
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigFile {
    /// Directory holding the hashed build output
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,

    /// Where the baseline snapshot is written and read
    #[serde(default = "default_baseline_path")]
    pub baseline_path: PathBuf,

    /// Where the comparison report is written and read
    #[serde(default = "default_report_path")]
    pub report_path: PathBuf,

    /// Tracked file extensions (without the leading dot)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Maximum number of warn/fail chunks listed by `summary`
    #[serde(default = "default_summary_limit")]
    pub summary_limit: usize,

    /// Warn/fail thresholds
    #[serde(default)]
    pub thresholds: Thresholds,
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(DEFAULT_ASSETS_DIR)
}

fn default_baseline_path() -> PathBuf {
    PathBuf::from(DEFAULT_BASELINE_PATH)
}

fn default_report_path() -> PathBuf {
    PathBuf::from(DEFAULT_REPORT_PATH)
}

fn default_extensions() -> Vec<String> {
    vec!["js".to_string(), "css".to_string()]
}

fn default_summary_limit() -> usize {
    DEFAULT_SUMMARY_LIMIT
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            assets_dir: default_assets_dir(),
            baseline_path: default_baseline_path(),
            report_path: default_report_path(),
            extensions: default_extensions(),
            summary_limit: default_summary_limit(),
            thresholds: Thresholds::default(),
        }
    }
}
