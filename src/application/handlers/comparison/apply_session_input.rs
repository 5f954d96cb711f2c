//! ApplySessionInputHandler - Command handler feeding inputs into a session.

use crate::domain::session::{ComparisonSession, SessionError, SessionInput};

/// Command to apply inputs, in order, to a session.
#[derive(Debug, Clone)]
pub struct ApplySessionInputCommand {
    pub inputs: Vec<SessionInput>,
}

impl ApplySessionInputCommand {
    pub fn single(input: SessionInput) -> Self {
        Self {
            inputs: vec![input],
        }
    }
}

/// Result of applying inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplySessionInputResult {
    pub applied: usize,
}

/// Handler for session inputs.
///
/// Inputs are applied one at a time; the first failure stops the batch and
/// leaves earlier inputs applied.
#[derive(Debug, Default)]
pub struct ApplySessionInputHandler;

impl ApplySessionInputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        session: &mut ComparisonSession,
        cmd: ApplySessionInputCommand,
    ) -> Result<ApplySessionInputResult, SessionError> {
        let mut applied = 0;
        for input in cmd.inputs {
            let kind = input.kind();
            if let Err(err) = session.apply(input) {
                tracing::warn!(
                    session_id = %session.id(),
                    input = kind,
                    code = %err.code(),
                    error = %err,
                    "Session input rejected"
                );
                return Err(err);
            }
            tracing::debug!(session_id = %session.id(), input = kind, "Session input applied");
            applied += 1;
        }
        Ok(ApplySessionInputResult { applied })
    }
}
