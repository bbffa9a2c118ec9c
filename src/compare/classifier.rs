//! Delta classification against warn/fail thresholds

use crate::config::ThresholdSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a size delta
///
/// Ordered so that `max()` over a set of statuses yields the most severe one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Within all limits
    Pass,
    /// Over a warn limit
    Warn,
    /// Over a fail limit
    Fail,
}

impl Status {
    /// Lowercase name as used in the report document
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Warn => "warn",
            Self::Fail => "fail",
        }
    }

    /// Whether the status needs attention (warn or fail)
    pub fn is_offending(&self) -> bool {
        *self != Self::Pass
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relative change reported for a chunk that only exists in the current build
pub const NEW_CHUNK_DELTA_PCT: f64 = 1.0;

/// Byte-size change between a baseline and a current measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delta {
    /// Baseline size in bytes
    pub baseline: u64,
    /// Current size in bytes
    pub current: u64,
}

impl Delta {
    /// Create a delta
    pub fn new(baseline: u64, current: u64) -> Self {
        Self { baseline, current }
    }

    /// Signed byte change (positive = growth)
    ///
    /// Widened to `i128` so any pair of `u64` sizes fits.
    pub fn bytes(&self) -> i128 {
        i128::from(self.current) - i128::from(self.baseline)
    }

    /// Relative change as a fraction of the baseline
    ///
    /// With a zero baseline the ratio is undefined and `None` is returned.
    pub fn ratio(&self) -> Option<f64> {
        (self.baseline > 0).then(|| self.bytes() as f64 / self.baseline as f64)
    }

    /// Relative change of a chunk, as reported and classified
    ///
    /// A chunk that appears from nothing counts as [`NEW_CHUNK_DELTA_PCT`]
    /// growth; an absent chunk on both sides is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundlesize::compare::{Delta, NEW_CHUNK_DELTA_PCT};
    ///
    /// assert_eq!(Delta::new(200, 100).pct(), -0.5);
    /// assert_eq!(Delta::new(0, 500).pct(), NEW_CHUNK_DELTA_PCT);
    /// assert_eq!(Delta::new(0, 0).pct(), 0.0);
    /// ```
    pub fn pct(&self) -> f64 {
        match self.ratio() {
            Some(ratio) => ratio,
            None if self.current > 0 => NEW_CHUNK_DELTA_PCT,
            None => 0.0,
        }
    }
}

/// Classify a chunk delta against a threshold set
///
/// `fail` if growth exceeds either fail limit, otherwise `warn` if it exceeds
/// either warn limit, otherwise `pass`. Limits are exclusive: growth exactly
/// at a limit passes it. Shrinking or unchanged sizes always pass. The
/// percentage compared is [`Delta::pct`], so a new chunk is judged as +100%.
///
/// # Examples
///
/// ```
/// use bundlesize::compare::{classify, Delta, Status};
/// use bundlesize::config::ThresholdSet;
///
/// let limits = ThresholdSet {
///     warn_pct: Some(0.10),
///     fail_pct: Some(0.25),
///     ..ThresholdSet::default()
/// };
///
/// assert_eq!(classify(&limits, Delta::new(1000, 1300)), Status::Fail);
/// assert_eq!(classify(&limits, Delta::new(1000, 1150)), Status::Warn);
/// assert_eq!(classify(&limits, Delta::new(1000, 900)), Status::Pass);
/// assert_eq!(classify(&limits, Delta::new(0, 10)), Status::Fail);
/// ```
pub fn classify(limits: &ThresholdSet, delta: Delta) -> Status {
    classify_change(limits, delta.bytes(), delta.pct())
}

/// Classify a signed byte change with an already computed relative change
///
/// Used for build totals, where an empty baseline means 0% rather than the
/// new-chunk sentinel.
pub fn classify_change(limits: &ThresholdSet, growth: i128, pct: f64) -> Status {
    if growth <= 0 {
        return Status::Pass;
    }

    let breaches = |pct_limit: Option<f64>, bytes_limit: Option<u64>| {
        let pct_breach = pct_limit.is_some_and(|limit| pct > limit);
        let bytes_breach = bytes_limit.is_some_and(|limit| growth > i128::from(limit));
        pct_breach || bytes_breach
    };

    if breaches(limits.fail_pct, limits.fail_bytes) {
        Status::Fail
    } else if breaches(limits.warn_pct, limits.warn_bytes) {
        Status::Warn
    } else {
        Status::Pass
    }
}
