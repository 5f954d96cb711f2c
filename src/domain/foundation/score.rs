//! Score value object (0.0 to 10.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A derived score between 0 and 10 inclusive.
///
/// Construction clamps into range, so every `Score` upholds the evaluation
/// invariant. NaN collapses to zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Score(f64);

impl Score {
    /// Zero points.
    pub const ZERO: Self = Self(0.0);

    /// Ten points.
    pub const TEN: Self = Self(10.0);

    /// Creates a new Score, clamping to the valid range.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 10.0))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value rounded to one decimal place, as reported to users.
    pub fn to_one_decimal(&self) -> f64 {
        round_to_tenth(self.0)
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Rounds half away from zero to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
