//! StartSessionHandler - Command handler for opening a comparison session.

use serde::Serialize;

use crate::config::ScoringConfig;
use crate::domain::analysis::validate_budget;
use crate::domain::foundation::{Money, Rating, SessionId};
use crate::domain::session::{ComparisonSession, SessionError};

/// Values every new session starts with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionDefaults {
    pub budget: Option<Money>,
    pub rating: Option<Rating>,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            budget: None,
            rating: Some(Rating::NEUTRAL),
        }
    }
}

impl TryFrom<&ScoringConfig> for SessionDefaults {
    type Error = SessionError;

    fn try_from(config: &ScoringConfig) -> Result<Self, Self::Error> {
        let budget = validate_budget(Some(config.default_budget))?;
        let rating = config.default_rating.map(Rating::try_new).transpose()?;
        Ok(Self {
            budget: Some(budget),
            rating,
        })
    }
}

/// Command to start a new session.
#[derive(Debug, Clone, Default)]
pub struct StartSessionCommand {
    /// Overrides the default budget.
    pub budget: Option<f64>,
}

/// Result of successful session start.
#[derive(Debug, Clone, Serialize)]
pub struct StartSessionResult {
    pub session: ComparisonSession,
}

/// Handler for starting sessions.
pub struct StartSessionHandler {
    defaults: SessionDefaults,
}

impl StartSessionHandler {
    pub fn new(defaults: SessionDefaults) -> Self {
        Self { defaults }
    }

    pub fn handle(&self, cmd: StartSessionCommand) -> Result<StartSessionResult, SessionError> {
        let budget = match cmd.budget {
            Some(amount) => Some(validate_budget(Some(amount))?),
            None => self.defaults.budget,
        };

        let session = ComparisonSession::new(SessionId::new(), budget, self.defaults.rating);

        tracing::debug!(
            session_id = %session.id(),
            budget = ?budget.map(|b| b.value()),
            "Comparison session started"
        );

        Ok(StartSessionResult { session })
    }
}
