//! Template Explainer - deterministic local explanation text.
//!
//! Always available and never fails, which makes it the fallback for any
//! remote explainer.

use async_trait::async_trait;

use crate::domain::analysis::{Comparison, Decision, TieReport};
use crate::domain::foundation::Money;
use crate::ports::{Explainer, ExplainerError, ExplainerInfo, Explanation, ExplanationRequest};

/// Closing line appended to every explanation.
pub const CLOSING_REMINDER: &str =
    "Every choice has an opportunity cost. The final decision is yours.";

/// Renders explanations from fixed sentence templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateExplainer;

impl TemplateExplainer {
    pub fn new() -> Self {
        Self
    }

    /// Renders the explanation text for a request.
    pub fn render(&self, request: &ExplanationRequest) -> String {
        let body = match &request.comparison {
            Comparison::Decided(decision) => render_decision(decision),
            Comparison::Tie(report) => render_tie(report),
            Comparison::NoAffordableAlternative => render_unaffordable(request.budget),
        };
        format!("{}\n\n{}", body, CLOSING_REMINDER)
    }
}

#[async_trait]
impl Explainer for TemplateExplainer {
    async fn explain(&self, request: ExplanationRequest) -> Result<Explanation, ExplainerError> {
        Ok(Explanation::primary(self.render(&request)))
    }

    fn explainer_info(&self) -> ExplainerInfo {
        ExplainerInfo::new("template")
    }
}

fn render_decision(decision: &Decision) -> String {
    let mut lines = vec![
        format!("Recommendation: {}", decision.winner),
        format!(
            "{} has a value index of {} against {} for {}, about {:.1} points more rational.",
            decision.winner,
            decision.winner_value_index,
            decision.runner_up_value_index,
            decision.runner_up,
            decision.margin
        ),
    ];

    if decision.lost_advantages.is_empty() {
        lines.push(format!(
            "Choosing {} gives up nothing that {} did better.",
            decision.winner, decision.runner_up
        ));
    } else {
        lines.push(format!(
            "Choosing {} gives up {} that {} had.",
            decision.winner,
            join_names(&decision.lost_advantages),
            decision.runner_up
        ));
    }

    lines.join("\n")
}

fn render_tie(report: &TieReport) -> String {
    let mut lines = vec![format!(
        "No single recommendation: {} and {} are equally rational (value index {}).",
        report.first, report.second, report.value_index
    )];
    for (name, advantages) in [
        (&report.first, &report.first_advantages),
        (&report.second, &report.second_advantages),
    ] {
        if advantages.is_empty() {
            lines.push(format!("{} is not stronger on any criterion.", name));
        } else {
            lines.push(format!("{} is stronger on {}.", name, join_names(advantages)));
        }
    }
    lines.join("\n")
}

fn render_unaffordable(budget: Money) -> String {
    format!(
        "Both alternatives cost more than the budget of {}, so neither can be recommended.\n\
         Raise the budget or look for cheaper options.",
        budget
    )
}

/// Joins names as "a", "a and b", "a, b and c".
fn join_names(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}
