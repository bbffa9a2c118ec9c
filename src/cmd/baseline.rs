//! Baseline command implementation
//!
//! Handles the `bundlesize baseline` command which scans the build output
//! directory and records chunk sizes as the new baseline.

use anyhow::Result;
use console::style;
use std::path::Path;

use crate::config::ConfigFile;
use crate::error::BundleSizeError;
use crate::fmt::{format_bytes, format_count};
use crate::snapshot::{BaselineStorage, Snapshot, SnapshotBuilder};

/// Scan `assets_dir` and write the result to `baseline_path`
///
/// The snapshot is fully built before anything is written, so a missing or
/// unreadable build directory leaves an existing baseline untouched.
///
/// # Errors
///
/// Returns [`BundleSizeError::MissingInput`] if `assets_dir` does not exist.
pub fn generate_baseline<S: AsRef<str>>(
    assets_dir: &Path,
    baseline_path: &Path,
    extensions: &[S],
) -> Result<Snapshot, BundleSizeError> {
    let snapshot = SnapshotBuilder::new(extensions).scan(assets_dir)?;
    BaselineStorage::new(baseline_path).save(&snapshot)?;
    Ok(snapshot)
}

/// Record a new baseline from the configured build output
///
/// # Examples
///
/// ```no_run
/// use bundlesize::cmd::baseline::cmd_baseline;
/// use bundlesize::config::ConfigFile;
///
/// cmd_baseline(&ConfigFile::default())?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_baseline(config: &ConfigFile) -> Result<()> {
    let snapshot = generate_baseline(
        &config.assets_dir,
        &config.baseline_path,
        &config.extensions,
    )?;

    println!(
        "{} Baseline generated: {}",
        style("✓").green(),
        style(config.baseline_path.display()).cyan()
    );
    println!("  Total chunks: {}", snapshot.chunks.len());
    println!(
        "  Total size: {} bytes ({})",
        format_count(snapshot.total.into()),
        format_bytes(snapshot.total)
    );

    Ok(())
}
