//! Explainer configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Explainer configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExplainerConfig {
    /// Whether reports include an explanation
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Time allowed for the primary explainer before falling back, in seconds
    ///
    /// Only bounds explainers that can stall, such as a remote service plugged
    /// in behind the `Explainer` port. The built-in template explainer answers
    /// immediately, so with it this limit is never reached.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ExplainerConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate explainer configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ExplainerConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_timeout() -> u64 {
    10
}
