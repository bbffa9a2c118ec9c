#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! bundlesize library
//!
//! This library provides the core functionality for tracking the size of
//! hashed web build output against a recorded baseline. It can be used
//! programmatically in addition to the CLI interface.
//!
//! # Basic Example
//!
//! Normalizing hashed asset names into stable chunk identities:
//!
//! ```
//! use bundlesize::snapshot::normalize;
//!
//! assert_eq!(normalize("index-BdGk3xQ1.js"), "index.js");
//! assert_eq!(normalize("chunk-A-f9e8d7c6b5a4.css"), "chunk.css");
//! assert_eq!(normalize("logo.svg"), "logo.svg");
//! ```
//!
//! # Advanced Example: Comparing Snapshots
//!
//! ```
//! use bundlesize::compare::{SnapshotComparator, Status};
//! use bundlesize::snapshot::Snapshot;
//! use std::collections::BTreeMap;
//!
//! let baseline = Snapshot::from_chunks(BTreeMap::from([("app.js".to_string(), 1000)]));
//! let current = Snapshot::from_chunks(BTreeMap::from([("app.js".to_string(), 1300)]));
//!
//! let report = SnapshotComparator::default().compare(&baseline, &current);
//! assert_eq!(report.status, Status::Fail);
//! assert_eq!(report.chunks["app.js"].delta_bytes(), 300);
//! ```
//!
//! # Advanced Example: Scanning a Build Directory
//!
//! ```
//! use bundlesize::snapshot::SnapshotBuilder;
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let dist = TempDir::new().unwrap();
//! fs::write(dist.path().join("app-a1b2c3d4e5.js"), vec![0u8; 300]).unwrap();
//! fs::write(dist.path().join("app-a1b2c3d4e5.js.map"), vec![0u8; 900]).unwrap();
//!
//! let snapshot = SnapshotBuilder::new(["js", "css"]).scan(dist.path()).unwrap();
//! assert_eq!(snapshot.total, 300);
//! assert_eq!(snapshot.size_of("app.js"), 300);
//! ```

/// Command handlers for CLI operations
pub mod cmd;
/// Snapshot comparison, classification and reports
pub mod compare;
/// Configuration file and threshold management
pub mod config;
/// JSON document persistence
pub mod document;
/// Enhanced error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Build output scanning and baseline storage
pub mod snapshot;
/// Human-readable report summaries
pub mod summary;
