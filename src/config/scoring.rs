//! Scoring defaults for new comparison sessions

use serde::Deserialize;

use super::error::ValidationError;

/// Scoring configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Budget a new session starts with
    #[serde(default = "default_budget")]
    pub default_budget: f64,

    /// Rating newly added criteria start at; unset leaves them unrated
    #[serde(default = "default_rating")]
    pub default_rating: Option<u8>,
}

impl ScoringConfig {
    /// Validate scoring configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.default_budget.is_finite() || self.default_budget < 0.0 {
            return Err(ValidationError::InvalidDefaultBudget);
        }
        if let Some(rating) = self.default_rating {
            if rating > 10 {
                return Err(ValidationError::InvalidDefaultRating(rating));
            }
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            default_budget: default_budget(),
            default_rating: default_rating(),
        }
    }
}

fn default_budget() -> f64 {
    30000.0
}

fn default_rating() -> Option<u8> {
    Some(5)
}
