//! Session domain module.
//!
//! A comparison session is the explicit per-user context that replaces
//! page-level mutable state: it accumulates inputs one event at a time and
//! can be scored whenever enough has been entered.

mod aggregate;
mod errors;
mod input;

pub use aggregate::{AlternativeDraft, ComparisonSession};
pub use errors::SessionError;
pub use input::{SessionInput, Slot};
