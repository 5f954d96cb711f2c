//! Session-specific error types.

use thiserror::Error;

use crate::domain::analysis::ScoringError;
use crate::domain::foundation::{ErrorCode, ValidationError};

/// Errors raised while applying input to a comparison session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// Input failed value-object validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Input cannot be scored yet.
    #[error(transparent)]
    Scoring(#[from] ScoringError),

    /// Rating refers to a criterion the session does not have.
    #[error("Unknown criterion: {0}")]
    UnknownCriterion(String),

    /// Theme is not in the catalog.
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// Session no longer accepts input.
    #[error("Session has ended")]
    Ended,
}

impl SessionError {
    pub fn unknown_criterion(name: impl Into<String>) -> Self {
        SessionError::UnknownCriterion(name.into())
    }

    pub fn unknown_theme(name: impl Into<String>) -> Self {
        SessionError::UnknownTheme(name.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::Validation(_) => ErrorCode::ValidationFailed,
            SessionError::Scoring(err) => err.code(),
            SessionError::UnknownCriterion(_) => ErrorCode::UnknownCriterion,
            SessionError::UnknownTheme(_) => ErrorCode::UnknownTheme,
            SessionError::Ended => ErrorCode::SessionEnded,
        }
    }
}
