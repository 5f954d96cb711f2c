//! Explainer Port - Interface for turning a comparison into prose.
//!
//! The numeric result is always computed locally. An explainer only narrates
//! it, so a failing or slow explainer must never change what is recommended.
//!
//! # Design
//!
//! - One request per comparison, carrying the finished `Comparison`
//! - Error types distinguish transient failures from permanent ones
//! - Callers wrap remote explainers in a fallback that degrades to local text
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct CannedExplainer;
//!
//! #[async_trait]
//! impl Explainer for CannedExplainer {
//!     async fn explain(&self, request: ExplanationRequest) -> Result<Explanation, ExplainerError> {
//!         Ok(Explanation::primary("Pizza wins."))
//!     }
//!
//!     fn explainer_info(&self) -> ExplainerInfo {
//!         ExplainerInfo::new("canned")
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::analysis::{Comparison, Evaluation};
use crate::domain::foundation::{ErrorCode, Money, SessionId};

/// Port for natural-language explanations of a comparison result.
#[async_trait]
pub trait Explainer: Send + Sync {
    /// Produces an explanation for a finished comparison.
    async fn explain(&self, request: ExplanationRequest) -> Result<Explanation, ExplainerError>;

    /// Returns explainer information.
    fn explainer_info(&self) -> ExplainerInfo;
}

/// Everything an explainer may mention.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplanationRequest {
    /// Session the comparison came from, for tracing.
    pub session_id: SessionId,
    pub budget: Money,
    pub comparison: Comparison,
    /// Per-alternative scores; empty when nothing was affordable.
    pub evaluations: Vec<Evaluation>,
}

impl ExplanationRequest {
    pub fn new(session_id: SessionId, budget: Money, comparison: Comparison) -> Self {
        Self {
            session_id,
            budget,
            comparison,
            evaluations: Vec::new(),
        }
    }

    /// Attaches the evaluations behind the comparison.
    pub fn with_evaluations(mut self, evaluations: Vec<Evaluation>) -> Self {
        self.evaluations = evaluations;
        self
    }
}

/// Where an explanation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplanationSource {
    /// The configured explainer answered.
    Primary,
    /// The configured explainer failed and local text was used instead.
    Fallback,
}

/// Explanation text plus its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    pub text: String,
    pub source: ExplanationSource,
}

impl Explanation {
    /// Creates an explanation produced by the configured explainer.
    pub fn primary(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: ExplanationSource::Primary,
        }
    }

    /// Creates an explanation produced by the local fallback.
    pub fn fallback(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: ExplanationSource::Fallback,
        }
    }

    /// Returns true if the fallback produced this explanation.
    pub fn is_fallback(&self) -> bool {
        self.source == ExplanationSource::Fallback
    }
}

/// Explainer information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainerInfo {
    /// Explainer name (e.g., "template", "mock").
    pub name: String,
}

impl ExplainerInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Explainer errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExplainerError {
    /// Rate limited by the backing service.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// Backing service is unavailable.
    #[error("explainer unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Request timed out.
    #[error("explanation timed out after {timeout_ms}ms")]
    Timeout {
        /// Configured timeout in milliseconds.
        timeout_ms: u128,
    },

    /// Response could not be used.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Request cannot be explained.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ExplainerError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a timeout error.
    pub fn timeout(limit: Duration) -> Self {
        Self::Timeout {
            timeout_ms: limit.as_millis(),
        }
    }

    /// Creates an invalid response error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::ExplainerUnavailable
    }

    /// Returns true if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ExplainerError::RateLimited { .. }
                | ExplainerError::Unavailable { .. }
                | ExplainerError::Timeout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builder_attaches_evaluations() {
        let request = ExplanationRequest::new(
            SessionId::new(),
            Money::try_new(30000.0).unwrap(),
            Comparison::NoAffordableAlternative,
        );
        assert!(request.evaluations.is_empty());

        let request = request.with_evaluations(Vec::new());
        assert_eq!(request.comparison, Comparison::NoAffordableAlternative);
    }

    #[test]
    fn explanation_constructors_set_source() {
        assert!(!Explanation::primary("a").is_fallback());
        assert!(Explanation::fallback("b").is_fallback());
    }

    #[test]
    fn transient_errors_are_retryable() {
        assert!(ExplainerError::RateLimited { retry_after_secs: 5 }.is_retryable());
        assert!(ExplainerError::unavailable("down").is_retryable());
        assert!(ExplainerError::timeout(Duration::from_secs(3)).is_retryable());
    }

    #[test]
    fn permanent_errors_are_not_retryable() {
        assert!(!ExplainerError::invalid_response("empty").is_retryable());
        assert!(!ExplainerError::InvalidRequest("bad".to_string()).is_retryable());
    }

    #[test]
    fn every_error_maps_to_unavailable_code() {
        assert_eq!(
            ExplainerError::invalid_response("x").code(),
            ErrorCode::ExplainerUnavailable
        );
    }

    #[test]
    fn errors_display_details() {
        assert_eq!(
            ExplainerError::timeout(Duration::from_secs(3)).to_string(),
            "explanation timed out after 3000ms"
        );
    }

    #[test]
    fn sub_second_timeout_keeps_milliseconds() {
        assert_eq!(
            ExplainerError::timeout(Duration::from_millis(250)).to_string(),
            "explanation timed out after 250ms"
        );
    }
}
