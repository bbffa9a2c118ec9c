//! Configuration for bundlesize
//!
//! This module provides:
//! - `.bundlesize.toml` file structure and defaults
//! - Warn/fail threshold sets for chunks and totals
//! - Config file loading and validation

pub mod file;
pub mod loader;
pub mod thresholds;

pub use file::{ConfigFile, CONFIG_FILE_NAME};
pub use loader::ConfigLoader;
pub use thresholds::{ThresholdSet, Thresholds};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_name_constant_is_correct() {
        assert_eq!(CONFIG_FILE_NAME, ".bundlesize.toml");
    }
}
