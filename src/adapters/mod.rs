//! Adapters - Implementations of ports and outside-world formats.
//!
//! - `explainer` - Explainer port implementations
//! - `report` - Plain-text comparison and theme reports
//! - `scenario` - YAML/JSON scenario files

pub mod explainer;
pub mod report;
pub mod scenario;
