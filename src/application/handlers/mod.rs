//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod comparison;

pub use comparison::{
    ApplySessionInputCommand, ApplySessionInputHandler, ApplySessionInputResult,
    CompareAlternativesHandler, CompareAlternativesResult, SessionDefaults, StartSessionCommand,
    StartSessionHandler, StartSessionResult,
};
