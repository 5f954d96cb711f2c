//! Mock Explainer for testing.
//!
//! # Features
//!
//! - Pre-configured responses, consumed in order
//! - Simulated delays for timeout testing
//! - Error injection for fallback testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let explainer = MockExplainer::new()
//!     .with_error(ExplainerError::unavailable("down"))
//!     .with_delay(Duration::from_millis(100));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{Explainer, ExplainerError, ExplainerInfo, Explanation, ExplanationRequest};

/// Text returned once the configured responses run out.
pub const DEFAULT_MOCK_TEXT: &str = "Mock explanation";

/// Mock explainer for testing.
#[derive(Debug, Clone)]
pub struct MockExplainer {
    responses: Arc<Mutex<VecDeque<Result<String, ExplainerError>>>>,
    info: ExplainerInfo,
    delay: Duration,
    calls: Arc<Mutex<Vec<ExplanationRequest>>>,
}

impl Default for MockExplainer {
    fn default() -> Self {
        Self::new()
    }
}

impl MockExplainer {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            info: ExplainerInfo::new("mock"),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a successful response to the queue.
    pub fn with_response(self, text: impl Into<String>) -> Self {
        lock(&self.responses).push_back(Ok(text.into()));
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: ExplainerError) -> Self {
        lock(&self.responses).push_back(Err(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made to this explainer.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<ExplanationRequest> {
        lock(&self.calls).clone()
    }

    fn next_response(&self) -> Result<String, ExplainerError> {
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| Ok(DEFAULT_MOCK_TEXT.to_string()))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl Explainer for MockExplainer {
    async fn explain(&self, request: ExplanationRequest) -> Result<Explanation, ExplainerError> {
        lock(&self.calls).push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        self.next_response().map(Explanation::primary)
    }

    fn explainer_info(&self) -> ExplainerInfo {
        self.info.clone()
    }
}
