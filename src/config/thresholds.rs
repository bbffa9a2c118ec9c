//! Warn/fail thresholds for size deltas
//!
//! Each [`ThresholdSet`] carries a percentage limit and an absolute byte limit
//! per tier. The two are alternatives: a delta trips a tier as soon as it
//! exceeds either configured limit. Percentages are fractions of the baseline
//! size (`0.10` == 10%), matching `deltaPct` in the report document.

use crate::error::BundleSizeError;
use serde::{Deserialize, Serialize};

/// Warn and fail limits for a single delta
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ThresholdSet {
    /// Relative growth above which the delta warns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warn_pct: Option<f64>,

    /// Relative growth above which the delta fails
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_pct: Option<f64>,

    /// Absolute growth in bytes above which the delta warns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warn_bytes: Option<u64>,

    /// Absolute growth in bytes above which the delta fails
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_bytes: Option<u64>,
}

impl ThresholdSet {
    /// Per-chunk defaults: warn above 10% growth, fail above 25%
    pub const CHUNK_DEFAULT: Self = Self {
        warn_pct: Some(0.10),
        fail_pct: Some(0.25),
        warn_bytes: None,
        fail_bytes: None,
    };

    /// Whole-build defaults: warn above 5% growth, fail above 10%
    pub const TOTAL_DEFAULT: Self = Self {
        warn_pct: Some(0.05),
        fail_pct: Some(0.10),
        warn_bytes: None,
        fail_bytes: None,
    };

    /// Fill every unset limit from `fallback`
    pub fn or(self, fallback: Self) -> Self {
        Self {
            warn_pct: self.warn_pct.or(fallback.warn_pct),
            fail_pct: self.fail_pct.or(fallback.fail_pct),
            warn_bytes: self.warn_bytes.or(fallback.warn_bytes),
            fail_bytes: self.fail_bytes.or(fallback.fail_bytes),
        }
    }

    /// Validate that limits are usable and that warn never exceeds fail
    pub fn validate(&self, scope: &str) -> Result<(), BundleSizeError> {
        for (name, pct) in [("warn-pct", self.warn_pct), ("fail-pct", self.fail_pct)] {
            if let Some(pct) = pct {
                if !pct.is_finite() || pct < 0.0 {
                    return Err(BundleSizeError::InvalidThresholds {
                        reason: format!(
                            "{} {} must be a non-negative fraction, got {}",
                            scope, name, pct
                        ),
                    });
                }
            }
        }

        if let (Some(warn), Some(fail)) = (self.warn_pct, self.fail_pct) {
            if warn > fail {
                return Err(BundleSizeError::InvalidThresholds {
                    reason: format!(
                        "{} warn-pct ({}) cannot exceed fail-pct ({})",
                        scope, warn, fail
                    ),
                });
            }
        }

        if let (Some(warn), Some(fail)) = (self.warn_bytes, self.fail_bytes) {
            if warn > fail {
                return Err(BundleSizeError::InvalidThresholds {
                    reason: format!(
                        "{} warn-bytes ({}) cannot exceed fail-bytes ({})",
                        scope, warn, fail
                    ),
                });
            }
        }

        Ok(())
    }
}

/// Thresholds applied to individual chunks and to the build total
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Limits checked against every chunk delta
    pub chunk: ThresholdSet,
    /// Limits checked against the total delta
    pub total: ThresholdSet,
}

impl Thresholds {
    /// Fill limits the user left unset with the built-in defaults
    pub fn with_defaults(self) -> Self {
        Self {
            chunk: self.chunk.or(ThresholdSet::CHUNK_DEFAULT),
            total: self.total.or(ThresholdSet::TOTAL_DEFAULT),
        }
    }

    /// Validate both sets
    pub fn validate(&self) -> Result<(), BundleSizeError> {
        self.chunk.validate("chunk")?;
        self.total.validate("total")
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            chunk: ThresholdSet::CHUNK_DEFAULT,
            total: ThresholdSet::TOTAL_DEFAULT,
        }
    }
}
