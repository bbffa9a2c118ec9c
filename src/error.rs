//! Error types with contextual suggestions
//!
//! Provides structured error types that include:
//! - Actionable error messages
//! - Suggested fixes and recovery actions
//! - Proper exit codes for CI/CD
//!
//! # Examples
//!
//! ```no_run
//! use bundlesize::error::BundleSizeError;
//! use bundlesize::snapshot::SnapshotBuilder;
//! use std::path::Path;
//!
//! let builder = SnapshotBuilder::new(["js", "css"]);
//!
//! match builder.scan(Path::new("dist/assets")) {
//!     Ok(snapshot) => println!("Scanned {} chunks", snapshot.chunks.len()),
//!     Err(e) => {
//!         eprintln!("Scan failed: {}", e);
//!         std::process::exit(1);
//!     }
//! }
//! ```

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Kind of persisted JSON document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Baseline snapshot (`.bundlesize.baseline.json`)
    Baseline,
    /// Comparison report (`.bundlesize.report.json`)
    Report,
    /// Configuration file (`.bundlesize.toml`)
    Config,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Baseline => "baseline",
            Self::Report => "report",
            Self::Config => "config",
        };
        f.write_str(name)
    }
}

/// bundlesize errors with contextual suggestions
#[derive(Error, Debug)]
pub enum BundleSizeError {
    /// Build output directory does not exist
    #[error("Build output directory not found: {path}")]
    MissingInput {
        /// Directory that was expected to hold build assets
        path: PathBuf,
    },

    /// A baseline or report document is required but absent
    #[error("{kind} file not found: {path}")]
    DocumentNotFound {
        /// Document kind
        kind: DocumentKind,
        /// Path that was read
        path: PathBuf,
    },

    /// Document exists but is not valid JSON/TOML or has the wrong shape
    #[error("Malformed {kind} file {path}: {reason}")]
    MalformedDocument {
        /// Document kind
        kind: DocumentKind,
        /// Path that was read
        path: PathBuf,
        /// Parser message
        reason: String,
    },

    /// Warn/fail thresholds are inconsistent
    #[error("Invalid thresholds: {reason}")]
    InvalidThresholds {
        /// What is wrong with the configured thresholds
        reason: String,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl BundleSizeError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundlesize::error::BundleSizeError;
    /// use std::path::PathBuf;
    ///
    /// let error = BundleSizeError::MissingInput {
    ///     path: PathBuf::from("dist/assets"),
    /// };
    ///
    /// assert!(error.suggestion().unwrap().contains("build"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::MissingInput { path } => Some(format!(
                "Run the build first so that {} contains the compiled assets",
                path.display()
            )),
            Self::DocumentNotFound { kind, .. } => match kind {
                DocumentKind::Baseline => {
                    Some("Run 'bundlesize baseline' to record a baseline".to_string())
                }
                DocumentKind::Report => {
                    Some("Run 'bundlesize compare' to produce a report".to_string())
                }
                DocumentKind::Config => {
                    Some("Create a .bundlesize.toml or omit --config".to_string())
                }
            },
            Self::MalformedDocument { kind, .. } => match kind {
                DocumentKind::Config => {
                    Some("Fix the TOML syntax or remove the offending keys".to_string())
                }
                _ => Some(format!(
                    "Regenerate the {} file; it must be a JSON document written by bundlesize",
                    kind
                )),
            },
            Self::InvalidThresholds { .. } => Some(
                "Warn limits must not exceed fail limits; check [thresholds] in .bundlesize.toml"
                    .to_string(),
            ),
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
        }
    }

    /// Get documentation URL for this error.
    pub fn docs_url(&self) -> Option<&str> {
        match self {
            Self::InvalidThresholds { .. } => Some("https://docs.rs/bundlesize#configuration"),
            Self::MalformedDocument {
                kind: DocumentKind::Config,
                ..
            } => Some("https://docs.rs/bundlesize#configuration"),
            _ => None,
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// A missing build directory exits with 1; the remaining codes follow
    /// sysexits.h conventions.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundlesize::error::BundleSizeError;
    /// use std::path::PathBuf;
    ///
    /// let error = BundleSizeError::MissingInput {
    ///     path: PathBuf::from("dist/assets"),
    /// };
    /// assert_eq!(error.exit_code(), 1);
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingInput { .. } => 1,
            Self::DocumentNotFound { .. } => 66,  // EX_NOINPUT
            Self::MalformedDocument { .. } => 65, // EX_DATAERR
            Self::InvalidThresholds { .. } => 78, // EX_CONFIG
            Self::Io { .. } => 74,                // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with suggestions and documentation links
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        // Error chain (caused by)
        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(bs_error) = Self::find(error) {
            if let Some(suggestion) = bs_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }

            if let Some(docs) = bs_error.docs_url() {
                output.push_str(&format!("{} {}\n", style("docs:").blue(), docs));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        Self::find(error).map_or(1, BundleSizeError::exit_code)
    }

    /// First `BundleSizeError` in the chain, including ones wrapped by `.context()`
    fn find(error: &anyhow::Error) -> Option<&BundleSizeError> {
        error
            .chain()
            .find_map(|cause| cause.downcast_ref::<BundleSizeError>())
    }
}
