//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - Build output fixture creation
//! - A preconfigured binary command rooted in a fixture project

pub mod fixtures;

use assert_cmd::Command;
use std::path::Path;

/// bundlesize binary command running inside `project_root`
#[allow(dead_code)]
pub fn bin_in(project_root: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bundlesize"));
    cmd.current_dir(project_root).env("NO_COLOR", "1");
    cmd
}
