//! SessionStatus enum for tracking lifecycle of comparison sessions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a comparison session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Active,
    Ended,
}

impl SessionStatus {
    /// Returns true if the session still accepts input.
    pub fn is_mutable(&self) -> bool {
        matches!(self, SessionStatus::Active)
    }

    /// Validates a transition from this status to another.
    ///
    /// Valid transitions:
    /// - Active -> Ended
    pub fn can_transition_to(&self, target: &SessionStatus) -> bool {
        use SessionStatus::*;
        matches!((self, target), (Active, Ended))
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionStatus::Active => "Active",
            SessionStatus::Ended => "Ended",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_active() {
        assert_eq!(SessionStatus::default(), SessionStatus::Active);
    }

    #[test]
    fn is_mutable_works_correctly() {
        assert!(SessionStatus::Active.is_mutable());
        assert!(!SessionStatus::Ended.is_mutable());
    }

    #[test]
    fn active_can_transition_to_ended() {
        assert!(SessionStatus::Active.can_transition_to(&SessionStatus::Ended));
    }

    #[test]
    fn ended_is_terminal() {
        assert!(!SessionStatus::Ended.can_transition_to(&SessionStatus::Active));
        assert!(!SessionStatus::Ended.can_transition_to(&SessionStatus::Ended));
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(serde_json::to_string(&SessionStatus::Ended).unwrap(), "\"ended\"");
    }
}
