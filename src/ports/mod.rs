//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Explanation Ports
//!
//! - `Explainer` - Natural-language narration of a comparison result

mod explainer;

pub use explainer::{
    Explainer, ExplainerError, ExplainerInfo, Explanation, ExplanationRequest, ExplanationSource,
};
