//! Comparison session handlers.

mod apply_session_input;
mod compare_alternatives;
mod start_session;

pub use apply_session_input::{
    ApplySessionInputCommand, ApplySessionInputHandler, ApplySessionInputResult,
};
pub use compare_alternatives::{CompareAlternativesHandler, CompareAlternativesResult};
pub use start_session::{
    SessionDefaults, StartSessionCommand, StartSessionHandler, StartSessionResult,
};
