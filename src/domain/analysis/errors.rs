//! Scoring error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Errors that stop a comparison from being scored.
///
/// Both variants are recoverable by the user correcting input. The case where
/// every alternative is over budget is not an error; it is reported as
/// [`Comparison::NoAffordableAlternative`](super::Comparison::NoAffordableAlternative).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    /// Budget is negative, not a number, or was never entered.
    #[error("Budget is invalid: {reason}")]
    InvalidBudget { reason: String },

    /// A required price or rating has not been entered yet.
    #[error("Please enter the {field} before scoring")]
    IncompleteInput { field: String },
}

impl ScoringError {
    /// Creates an invalid budget error.
    pub fn invalid_budget(reason: impl Into<String>) -> Self {
        ScoringError::InvalidBudget {
            reason: reason.into(),
        }
    }

    /// Creates an incomplete input error naming the missing field.
    pub fn incomplete(field: impl Into<String>) -> Self {
        ScoringError::IncompleteInput {
            field: field.into(),
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ScoringError::InvalidBudget { .. } => ErrorCode::InvalidBudget,
            ScoringError::IncompleteInput { .. } => ErrorCode::IncompleteInput,
        }
    }
}

impl From<ValidationError> for ScoringError {
    fn from(err: ValidationError) -> Self {
        if err.field() == "budget" {
            ScoringError::invalid_budget(err.to_string())
        } else {
            ScoringError::incomplete(err.field().to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_input_names_the_field() {
        let err = ScoringError::incomplete("price of pizza");
        assert_eq!(err.to_string(), "Please enter the price of pizza before scoring");
        assert_eq!(err.code(), ErrorCode::IncompleteInput);
    }

    #[test]
    fn budget_validation_error_maps_to_invalid_budget() {
        let err: ScoringError = ValidationError::negative("budget", -10.0).into();
        assert_eq!(err.code(), ErrorCode::InvalidBudget);
    }
}
