//! Test fixture helpers for creating build output directories
//!
//! Provides utilities for laying out a project with a `dist/assets`
//! directory full of hashed chunks of known sizes.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project with a `dist/assets` build output directory
pub struct Project {
    temp_dir: TempDir,
}

impl Project {
    /// Create an empty project with `dist/assets` in place
    pub fn new() -> anyhow::Result<Self> {
        let temp_dir = TempDir::new()?;
        fs::create_dir_all(temp_dir.path().join("dist").join("assets"))?;
        Ok(Self { temp_dir })
    }

    /// Create a project whose build output contains `files` (name, size)
    pub fn with_assets(files: &[(&str, usize)]) -> anyhow::Result<Self> {
        let project = Self::new()?;
        project.replace_assets(files)?;
        Ok(project)
    }

    /// Project root
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Build output directory
    pub fn assets_dir(&self) -> PathBuf {
        self.root().join("dist").join("assets")
    }

    /// Default baseline document path
    pub fn baseline_path(&self) -> PathBuf {
        self.root().join(".bundlesize.baseline.json")
    }

    /// Default report document path
    pub fn report_path(&self) -> PathBuf {
        self.root().join(".bundlesize.report.json")
    }

    /// Simulate a rebuild: remove every asset and write `files` instead
    pub fn replace_assets(&self, files: &[(&str, usize)]) -> anyhow::Result<()> {
        let dir = self.assets_dir();
        fs::remove_dir_all(&dir)?;
        fs::create_dir_all(&dir)?;
        for (name, size) in files {
            fs::write(dir.join(name), vec![b'x'; *size])?;
        }
        Ok(())
    }

    /// Write `.bundlesize.toml` at the project root
    pub fn write_config(&self, contents: &str) -> anyhow::Result<PathBuf> {
        let path = self.root().join(".bundlesize.toml");
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Parse a JSON document written by the tool
    pub fn read_json(&self, path: &Path) -> anyhow::Result<serde_json::Value> {
        Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
    }
}
