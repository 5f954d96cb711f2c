//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `choice` - Alternatives, criteria, and the built-in theme catalog
//! - `analysis` - Pure scoring services (affordability, value index, comparison)
//! - `session` - Comparison session aggregate and its input events

pub mod analysis;
pub mod choice;
pub mod foundation;
pub mod session;
