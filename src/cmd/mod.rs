//! Command handlers for the bundlesize CLI
//!
//! Each submodule handles a specific CLI command.

pub mod baseline;
pub mod compare;
pub mod completions;
pub mod summary;

// Re-export command functions for convenient access
pub use baseline::{cmd_baseline, generate_baseline};
pub use compare::{cmd_compare, generate_report};
pub use completions::cmd_completions;
pub use summary::cmd_summary;
