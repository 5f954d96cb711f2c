//! Rating value object for criterion satisfaction (0 to 10 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Subjective satisfaction rating for one criterion: 0 (worst) to 10 (best).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest possible rating.
    pub const MIN: Self = Self(0);

    /// Highest possible rating.
    pub const MAX: Self = Self(10);

    /// Midpoint rating, used as the starting value for new criteria.
    pub const NEUTRAL: Self = Self(5);

    /// Creates a Rating, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > Self::MAX.0 {
            return Err(ValidationError::out_of_range(
                "rating",
                i64::from(Self::MIN.0),
                i64::from(Self::MAX.0),
                i64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Creates a Rating from a wider integer, returning error if out of range.
    pub fn try_from_i64(value: i64) -> Result<Self, ValidationError> {
        u8::try_from(value)
            .ok()
            .and_then(|v| Self::try_new(v).ok())
            .ok_or_else(|| ValidationError::out_of_range("rating", 0, 10, value))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the rating as a float for averaging.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl TryFrom<u8> for Rating {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_try_new_accepts_valid_values() {
        for v in 0..=10 {
            assert_eq!(Rating::try_new(v).unwrap().value(), v);
        }
    }

    #[test]
    fn rating_try_new_rejects_invalid_values() {
        assert!(Rating::try_new(11).is_err());
        assert!(Rating::try_new(255).is_err());
    }

    #[test]
    fn rating_try_from_i64_rejects_negative() {
        match Rating::try_from_i64(-1) {
            Err(ValidationError::OutOfRange { actual, .. }) => assert_eq!(actual, -1),
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
        assert_eq!(Rating::try_from_i64(7).unwrap().value(), 7);
    }

    #[test]
    fn rating_default_is_neutral() {
        assert_eq!(Rating::default(), Rating::NEUTRAL);
        assert_eq!(Rating::default().value(), 5);
    }

    #[test]
    fn rating_displays_out_of_ten() {
        assert_eq!(format!("{}", Rating::MAX), "10/10");
        assert_eq!(format!("{}", Rating::MIN), "0/10");
    }

    #[test]
    fn rating_ordering_works() {
        assert!(Rating::MIN < Rating::NEUTRAL);
        assert!(Rating::NEUTRAL < Rating::MAX);
    }

    #[test]
    fn rating_serializes_as_number() {
        let json = serde_json::to_string(&Rating::try_new(8).unwrap()).unwrap();
        assert_eq!(json, "8");
    }

    #[test]
    fn rating_deserialization_validates_range() {
        let rating: Rating = serde_json::from_str("3").unwrap();
        assert_eq!(rating.value(), 3);
        assert!(serde_json::from_str::<Rating>("12").is_err());
    }
}
