//! Analysis Module - Pure domain services for rational-choice scoring.
//!
//! # Components
//!
//! - `score_affordability` - 0-10 score rewarding a lower price within budget
//! - `Evaluation` - per-criterion scores plus the value index (plain mean)
//! - `compare` - winner, margin, and opportunity cost (lost advantages)
//!
//! # Design Philosophy
//!
//! All functions are pure and synchronous. They take domain objects as input
//! and return computed results. No ports or adapters needed since there's no
//! I/O or external dependencies.

mod affordability;
mod comparator;
mod errors;
mod evaluation;

pub use affordability::{score_affordability, validate_budget};
pub use comparator::{compare, Comparison, Decision, TieReport, TIE_TOLERANCE};
pub use errors::ScoringError;
pub use evaluation::{value_index, Evaluation, EvaluationEntry};
