//! Explainer Adapters.
//!
//! Implementations of the Explainer port.
//!
//! ## Available Adapters
//!
//! - `TemplateExplainer` - Deterministic local text
//! - `MockExplainer` - Configurable mock for testing
//! - `FallbackExplainer` - Timeout plus local fallback around another explainer

mod fallback_explainer;
mod mock_explainer;
mod template_explainer;

pub use fallback_explainer::{FallbackExplainer, DEFAULT_EXPLAINER_TIMEOUT};
pub use mock_explainer::{MockExplainer, DEFAULT_MOCK_TEXT};
pub use template_explainer::{TemplateExplainer, CLOSING_REMINDER};
