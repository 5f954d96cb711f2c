//! CompareAlternativesHandler - Query handler scoring a session's alternatives.
//!
//! Scoring always happens locally. If an explainer is configured, it narrates
//! the finished result; an explainer failure is logged and leaves the report
//! without prose rather than failing the comparison.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::analysis::{Comparison, Evaluation, ScoringError};
use crate::domain::foundation::{Money, SessionId};
use crate::domain::session::ComparisonSession;
use crate::ports::{Explainer, Explanation, ExplanationRequest};

/// Full comparison report.
#[derive(Debug, Clone, Serialize)]
pub struct CompareAlternativesResult {
    pub session_id: SessionId,
    pub budget: Money,
    pub comparison: Comparison,
    /// Scores per alternative, in slot order. Empty when nothing was
    /// affordable and the inputs were not complete enough to score.
    pub evaluations: Vec<Evaluation>,
    pub explanation: Option<Explanation>,
}

/// Handler for comparing a session's two alternatives.
pub struct CompareAlternativesHandler {
    explainer: Option<Arc<dyn Explainer>>,
}

impl CompareAlternativesHandler {
    /// Creates a handler that reports numbers only.
    pub fn new() -> Self {
        Self { explainer: None }
    }

    /// Adds an explainer for the report text.
    pub fn with_explainer(mut self, explainer: Arc<dyn Explainer>) -> Self {
        self.explainer = Some(explainer);
        self
    }

    pub async fn handle(
        &self,
        session: &ComparisonSession,
    ) -> Result<CompareAlternativesResult, ScoringError> {
        let comparison = session.compare()?;
        let budget = session
            .budget()
            .ok_or_else(|| ScoringError::invalid_budget("no budget was entered"))?;

        let evaluations = match &comparison {
            Comparison::NoAffordableAlternative => session
                .evaluations()
                .map(Vec::from)
                .unwrap_or_default(),
            _ => Vec::from(session.evaluations()?),
        };

        tracing::info!(
            session_id = %session.id(),
            winner = comparison.winner().unwrap_or("-"),
            margin = comparison.margin(),
            lost_advantages = comparison.lost_advantages().len(),
            "Alternatives compared"
        );

        let explanation = match &self.explainer {
            Some(explainer) => {
                let request = ExplanationRequest::new(*session.id(), budget, comparison.clone())
                    .with_evaluations(evaluations.clone());
                match explainer.explain(request).await {
                    Ok(explanation) => Some(explanation),
                    Err(err) => {
                        tracing::warn!(
                            session_id = %session.id(),
                            explainer = %explainer.explainer_info().name,
                            error = %err,
                            "Explanation unavailable"
                        );
                        None
                    }
                }
            }
            None => None,
        };

        Ok(CompareAlternativesResult {
            session_id: *session.id(),
            budget,
            comparison,
            evaluations,
            explanation,
        })
    }
}

impl Default for CompareAlternativesHandler {
    fn default() -> Self {
        Self::new()
    }
}
