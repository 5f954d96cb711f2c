//! Text Report - terminal rendering of a scored comparison.
//!
//! One block per evaluated alternative (criterion scores, then the value
//! index), followed by the explanation text. Without an explanation the
//! report ends with a one-line summary of the comparison.

use crate::domain::analysis::{Comparison, Evaluation};
use crate::domain::choice::Theme;
use crate::domain::foundation::Money;
use crate::ports::Explanation;

/// Everything shown in a text comparison report.
#[derive(Debug, Clone, Copy)]
pub struct ComparisonReport<'a> {
    pub budget: Money,
    pub evaluations: &'a [Evaluation],
    pub comparison: &'a Comparison,
    /// Replaced by `summary_line` when absent.
    pub explanation: Option<&'a Explanation>,
    /// Theme used to mark suggested items.
    pub theme: Option<&'a Theme>,
}

impl ComparisonReport<'_> {
    /// Renders the report, ending with a newline.
    pub fn render(&self) -> String {
        let mut out = format!("Budget: {}\n", self.budget);

        for evaluation in self.evaluations {
            let mut notes = vec![format!("price {}", evaluation.price())];
            if evaluation.is_over_budget() {
                notes.push("over budget".to_string());
            }
            if self.theme.is_some_and(|t| t.suggests(evaluation.alternative())) {
                notes.push("suggested".to_string());
            }
            out.push_str(&format!(
                "\n{} ({})\n",
                evaluation.alternative(),
                notes.join(", ")
            ));
            for entry in evaluation.entries() {
                out.push_str(&score_row(&entry.criterion, entry.score.value()));
            }
            out.push_str(&score_row("value index", evaluation.value_index().value()));
        }
        out.push('\n');

        match self.explanation {
            Some(explanation) => out.push_str(&explanation.text),
            None => out.push_str(&summary_line(self.comparison)),
        }
        out.push('\n');
        out
    }
}

fn score_row(label: &str, value: f64) -> String {
    format!("  {:<18}{:>5.1}\n", label, value)
}

/// One-line outcome used when no explanation is requested.
pub fn summary_line(comparison: &Comparison) -> String {
    match comparison {
        Comparison::Decided(d) => format!(
            "Recommendation: {} (+{:.1} over {})",
            d.winner, d.margin, d.runner_up
        ),
        Comparison::Tie(t) => format!("Tie: {} and {} are equally rational", t.first, t.second),
        Comparison::NoAffordableAlternative => "No alternative fits the budget.".to_string(),
    }
}

/// Lists themes with their suggested items and default criteria.
pub fn render_themes(themes: &[Theme]) -> String {
    let mut out = String::new();
    for theme in themes {
        out.push_str(&format!("{} ({})\n", theme.key, theme.label));
        out.push_str(&format!("  items:    {}\n", theme.items.join(", ")));
        out.push_str(&format!("  criteria: {}\n", theme.criteria.join(", ")));
    }
    out
}
