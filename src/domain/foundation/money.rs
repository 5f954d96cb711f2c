//! Money value object for prices and budgets.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A finite, non-negative amount of money in the session's currency unit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Money(f64);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(0.0);

    /// Creates an amount, returning error if negative or not finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        Self::try_new_for("amount", value)
    }

    /// Creates an amount, naming `field` in any validation error.
    pub fn try_new_for(field: &str, value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::not_finite(field));
        }
        if value < 0.0 {
            return Err(ValidationError::negative(field, value));
        }
        // Normalises -0.0.
        Ok(Self(value.abs()))
    }

    /// Returns the raw amount.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Returns true if this amount is strictly greater than `limit`.
    pub fn exceeds(&self, limit: Money) -> bool {
        self.0 > limit.0
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<f64> for Money {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Money> for f64 {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{}", group_thousands(&format!("{:.0}", self.0)))
        } else {
            write!(f, "{:.2}", self.0)
        }
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
