//! Fallback Explainer - bounds a primary explainer and degrades to local text.
//!
//! Any error from the primary, or no answer within the timeout, yields the
//! `TemplateExplainer` text marked as `ExplanationSource::Fallback`. This
//! adapter therefore never returns an error.
//!
//! # Example
//!
//! ```ignore
//! let explainer = FallbackExplainer::new(remote_explainer)
//!     .with_timeout(Duration::from_secs(5));
//! ```

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::timeout;

use super::TemplateExplainer;
use crate::ports::{Explainer, ExplainerError, ExplainerInfo, Explanation, ExplanationRequest};

/// Default time allowed for the primary explainer.
pub const DEFAULT_EXPLAINER_TIMEOUT: Duration = Duration::from_secs(10);

/// Explainer wrapper with a deterministic local fallback.
pub struct FallbackExplainer<P: Explainer> {
    primary: P,
    fallback: TemplateExplainer,
    timeout: Duration,
}

impl<P: Explainer> FallbackExplainer<P> {
    /// Wraps a primary explainer with the default timeout.
    pub fn new(primary: P) -> Self {
        Self {
            primary,
            fallback: TemplateExplainer::new(),
            timeout: DEFAULT_EXPLAINER_TIMEOUT,
        }
    }

    /// Sets the time allowed for the primary explainer.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the wrapped explainer.
    pub fn primary(&self) -> &P {
        &self.primary
    }

    fn degrade(&self, request: &ExplanationRequest, reason: &ExplainerError) -> Explanation {
        tracing::warn!(
            session_id = %request.session_id,
            explainer = %self.primary.explainer_info().name,
            retryable = reason.is_retryable(),
            code = %reason.code(),
            error = %reason,
            "Explainer failed, using local explanation"
        );
        Explanation::fallback(self.fallback.render(request))
    }
}

#[async_trait]
impl<P: Explainer + 'static> Explainer for FallbackExplainer<P> {
    async fn explain(&self, request: ExplanationRequest) -> Result<Explanation, ExplainerError> {
        match timeout(self.timeout, self.primary.explain(request.clone())).await {
            Ok(Ok(explanation)) if !explanation.text.trim().is_empty() => Ok(explanation),
            Ok(Ok(_)) => Ok(self.degrade(
                &request,
                &ExplainerError::invalid_response("empty explanation"),
            )),
            Ok(Err(err)) => Ok(self.degrade(&request, &err)),
            Err(_) => Ok(self.degrade(&request, &ExplainerError::timeout(self.timeout))),
        }
    }

    fn explainer_info(&self) -> ExplainerInfo {
        self.primary.explainer_info()
    }
}
