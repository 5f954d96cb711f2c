//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the rational-choice domain.

mod errors;
mod ids;
mod money;
mod rating;
mod score;
mod session_status;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::SessionId;
pub use money::Money;
pub use rating::Rating;
pub use score::{round_to_tenth, Score};
pub use session_status::SessionStatus;
pub use timestamp::Timestamp;
