//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' cannot be negative, got {actual}")]
    Negative { field: String, actual: f64 },

    #[error("Field '{field}' must be a finite number")]
    NotFinite { field: String },

    #[error("Field '{field}' already contains '{value}'")]
    Duplicate { field: String, value: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates a negative amount validation error.
    pub fn negative(field: impl Into<String>, actual: f64) -> Self {
        ValidationError::Negative {
            field: field.into(),
            actual,
        }
    }

    /// Creates a non-finite number validation error.
    pub fn not_finite(field: impl Into<String>) -> Self {
        ValidationError::NotFinite { field: field.into() }
    }

    /// Creates a duplicate value validation error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::Duplicate {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the field this error refers to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::Negative { field, .. }
            | ValidationError::NotFinite { field }
            | ValidationError::Duplicate { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Scoring errors
    InvalidBudget,
    IncompleteInput,

    // Session errors
    UnknownCriterion,
    UnknownTheme,
    SessionEnded,

    // Explainer errors
    ExplainerUnavailable,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidBudget => "INVALID_BUDGET",
            ErrorCode::IncompleteInput => "INCOMPLETE_INPUT",
            ErrorCode::UnknownCriterion => "UNKNOWN_CRITERION",
            ErrorCode::UnknownTheme => "UNKNOWN_THEME",
            ErrorCode::SessionEnded => "SESSION_ENDED",
            ErrorCode::ExplainerUnavailable => "EXPLAINER_UNAVAILABLE",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("criterion");
        assert_eq!(format!("{}", err), "Field 'criterion' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("rating", 0, 10, 11);
        assert_eq!(
            format!("{}", err),
            "Field 'rating' must be between 0 and 10, got 11"
        );
    }

    #[test]
    fn validation_error_negative_displays_correctly() {
        let err = ValidationError::negative("price", -5.0);
        assert_eq!(format!("{}", err), "Field 'price' cannot be negative, got -5");
    }

    #[test]
    fn validation_error_duplicate_displays_correctly() {
        let err = ValidationError::duplicate("criteria", "taste");
        assert_eq!(format!("{}", err), "Field 'criteria' already contains 'taste'");
    }

    #[test]
    fn validation_error_reports_field() {
        assert_eq!(ValidationError::not_finite("budget").field(), "budget");
        assert_eq!(
            ValidationError::invalid_format("theme", "unknown").field(),
            "theme"
        );
    }

    #[test]
    fn error_code_displays_screaming_snake_case() {
        assert_eq!(ErrorCode::InvalidBudget.to_string(), "INVALID_BUDGET");
        assert_eq!(ErrorCode::IncompleteInput.to_string(), "INCOMPLETE_INPUT");
        assert_eq!(ErrorCode::SessionEnded.to_string(), "SESSION_ENDED");
    }
}
