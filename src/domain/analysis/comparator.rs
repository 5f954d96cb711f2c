//! Comparator - picks the more rational alternative and reports its opportunity cost.

use serde::{Deserialize, Serialize};

use super::{Evaluation, ScoringError};
use crate::domain::foundation::{round_to_tenth, Score};

/// Value indices closer than this are treated as equal.
pub const TIE_TOLERANCE: f64 = 1e-9;

/// Outcome of comparing two evaluations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Comparison {
    /// One alternative has the strictly higher value index.
    Decided(Decision),
    /// Both value indices are equal.
    Tie(TieReport),
    /// Both prices exceed the budget, so nothing can be recommended.
    NoAffordableAlternative,
}

/// A decided comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub winner: String,
    pub runner_up: String,
    pub winner_value_index: Score,
    pub runner_up_value_index: Score,
    /// Winner's value index minus the runner-up's, rounded to one decimal.
    pub margin: f64,
    /// Criteria on which the runner-up scored strictly higher than the winner.
    pub lost_advantages: Vec<String>,
}

/// A tied comparison. Sides are ordered by name so the report does not
/// depend on argument order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TieReport {
    pub first: String,
    pub second: String,
    pub value_index: Score,
    /// Criteria on which `first` scored strictly higher than `second`.
    pub first_advantages: Vec<String>,
    /// Criteria on which `second` scored strictly higher than `first`.
    pub second_advantages: Vec<String>,
}

impl Comparison {
    /// Returns the recommended alternative, if there is exactly one.
    pub fn winner(&self) -> Option<&str> {
        match self {
            Comparison::Decided(d) => Some(&d.winner),
            _ => None,
        }
    }

    /// Returns the reported margin; zero for ties and unaffordable outcomes.
    pub fn margin(&self) -> f64 {
        match self {
            Comparison::Decided(d) => d.margin,
            _ => 0.0,
        }
    }

    /// Returns the opportunity cost of the recommendation.
    pub fn lost_advantages(&self) -> &[String] {
        match self {
            Comparison::Decided(d) => &d.lost_advantages,
            _ => &[],
        }
    }
}

/// Compares two evaluations.
///
/// # Order of checks
/// 1. Both over budget: `NoAffordableAlternative`
/// 2. Either price is zero (unset): `IncompleteInput`
/// 3. Higher value index wins; equal indices are a `Tie`
///
/// # Edge Cases
/// - A criterion present on only one side counts as 0 on the other side
/// - Lost advantages follow the winner's display order, then any criteria
///   only the runner-up has
pub fn compare(a: &Evaluation, b: &Evaluation) -> Result<Comparison, ScoringError> {
    if a.is_over_budget() && b.is_over_budget() {
        return Ok(Comparison::NoAffordableAlternative);
    }

    for eval in [a, b] {
        if eval.price().is_zero() {
            return Err(ScoringError::incomplete(format!(
                "price of {}",
                eval.alternative()
            )));
        }
    }

    let diff = a.value_index().value() - b.value_index().value();

    if diff.abs() < TIE_TOLERANCE {
        let (first, second) = if a.alternative() <= b.alternative() {
            (a, b)
        } else {
            (b, a)
        };
        return Ok(Comparison::Tie(TieReport {
            first: first.alternative().to_string(),
            second: second.alternative().to_string(),
            value_index: first.value_index(),
            first_advantages: advantages(first, second),
            second_advantages: advantages(second, first),
        }));
    }

    let (winner, runner_up) = if diff > 0.0 { (a, b) } else { (b, a) };

    Ok(Comparison::Decided(Decision {
        winner: winner.alternative().to_string(),
        runner_up: runner_up.alternative().to_string(),
        winner_value_index: winner.value_index(),
        runner_up_value_index: runner_up.value_index(),
        margin: round_to_tenth(diff.abs()),
        lost_advantages: advantages(runner_up, winner),
    }))
}

/// Criteria on which `better` scores strictly higher than `reference`.
fn advantages(better: &Evaluation, reference: &Evaluation) -> Vec<String> {
    let mut names: Vec<&str> = reference
        .entries()
        .iter()
        .map(|e| e.criterion.as_str())
        .collect();
    for entry in better.entries() {
        if !names.contains(&entry.criterion.as_str()) {
            names.push(&entry.criterion);
        }
    }

    names
        .into_iter()
        .filter(|name| {
            let mine = better.score_for(name).unwrap_or_default();
            let theirs = reference.score_for(name).unwrap_or_default();
            mine > theirs
        })
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::choice::{Alternative, AFFORDABILITY};
    use crate::domain::foundation::{Money, Rating};

    fn evaluate(name: &str, price: f64, budget: f64, ratings: &[(&str, u8)]) -> Evaluation {
        let mut alt = Alternative::new(name)
            .unwrap()
            .with_price(Money::try_new(price).unwrap());
        for (criterion, rating) in ratings {
            alt = alt
                .with_criterion(*criterion, Rating::try_new(*rating).unwrap())
                .unwrap();
        }
        Evaluation::for_alternative(&alt, Money::try_new(budget).unwrap()).unwrap()
    }

    #[test]
    fn higher_value_index_wins() {
        let a = evaluate("pizza", 20000.0, 30000.0, &[("taste", 8), ("portion", 7)]);
        let b = evaluate("chicken", 25000.0, 30000.0, &[("taste", 9), ("portion", 4)]);

        let result = compare(&a, &b).unwrap();
        assert_eq!(result.winner(), Some("pizza"));
        assert_eq!(result.lost_advantages(), &["taste".to_string()]);
    }

    #[test]
    fn margin_is_rounded_to_one_decimal() {
        // a: (8 + 7 + 6 + 3.33) / 4 = 6.083; b: (5 + 5 + 5 + 0) / 4 = 3.75
        let a = evaluate("A", 20000.0, 30000.0, &[("x", 8), ("y", 7), ("z", 6)]);
        let b = evaluate("B", 35000.0, 30000.0, &[("x", 5), ("y", 5), ("z", 5)]);

        let result = compare(&a, &b).unwrap();
        assert_eq!(result.winner(), Some("A"));
        assert_eq!(result.margin(), 2.3);
    }

    #[test]
    fn argument_order_does_not_change_winner_or_margin() {
        let a = evaluate("A", 12000.0, 30000.0, &[("x", 3), ("y", 9)]);
        let b = evaluate("B", 18000.0, 30000.0, &[("x", 8), ("y", 5)]);

        let ab = compare(&a, &b).unwrap();
        let ba = compare(&b, &a).unwrap();
        assert_eq!(ab.winner(), ba.winner());
        assert_eq!(ab.margin(), ba.margin());
        assert_eq!(ab, ba);
    }

    #[test]
    fn both_over_budget_reports_no_affordable_alternative() {
        let a = evaluate("A", 40000.0, 30000.0, &[("x", 9)]);
        let b = evaluate("B", 35000.0, 30000.0, &[("x", 2)]);

        assert_eq!(compare(&a, &b).unwrap(), Comparison::NoAffordableAlternative);
    }

    #[test]
    fn unaffordable_check_precedes_price_check() {
        let a = evaluate("A", 40000.0, 0.0, &[]);
        let b = evaluate("B", 35000.0, 0.0, &[]);

        assert_eq!(compare(&a, &b).unwrap(), Comparison::NoAffordableAlternative);
    }

    #[test]
    fn zero_price_requests_input() {
        let a = evaluate("A", 0.0, 30000.0, &[("x", 9)]);
        let b = evaluate("B", 10000.0, 30000.0, &[("x", 2)]);

        assert_eq!(
            compare(&a, &b),
            Err(ScoringError::incomplete("price of A"))
        );
    }

    #[test]
    fn one_over_budget_still_compares() {
        let a = evaluate("A", 35000.0, 30000.0, &[("x", 10)]);
        let b = evaluate("B", 15000.0, 30000.0, &[("x", 4)]);

        // a: (10 + 0) / 2 = 5; b: (4 + 5) / 2 = 4.5
        let result = compare(&a, &b).unwrap();
        assert_eq!(result.winner(), Some("A"));
        assert_eq!(result.lost_advantages(), &[AFFORDABILITY.to_string()]);
    }

    #[test]
    fn equal_value_indices_are_an_explicit_tie() {
        let a = evaluate("zucchini", 15000.0, 30000.0, &[("x", 7), ("y", 3)]);
        let b = evaluate("apple", 15000.0, 30000.0, &[("x", 3), ("y", 7)]);

        let ab = compare(&a, &b).unwrap();
        let ba = compare(&b, &a).unwrap();
        assert_eq!(ab, ba);

        match ab {
            Comparison::Tie(report) => {
                assert_eq!(report.first, "apple");
                assert_eq!(report.second, "zucchini");
                assert_eq!(report.first_advantages, vec!["y".to_string()]);
                assert_eq!(report.second_advantages, vec!["x".to_string()]);
            }
            other => panic!("Expected tie, got {:?}", other),
        }
        assert!(compare(&a, &b).unwrap().winner().is_none());
    }

    #[test]
    fn tied_criteria_are_not_lost_advantages() {
        let a = evaluate("A", 10000.0, 30000.0, &[("x", 9), ("y", 5)]);
        let b = evaluate("B", 20000.0, 30000.0, &[("x", 2), ("y", 5)]);

        let result = compare(&a, &b).unwrap();
        assert_eq!(result.winner(), Some("A"));
        assert!(result.lost_advantages().is_empty());
    }

    #[test]
    fn criterion_missing_on_winner_counts_as_zero() {
        let a = evaluate("A", 3000.0, 30000.0, &[("x", 10)]);
        let b = evaluate("B", 29000.0, 30000.0, &[("x", 1), ("extra", 2)]);

        let result = compare(&a, &b).unwrap();
        assert_eq!(result.winner(), Some("A"));
        assert_eq!(result.lost_advantages(), &["extra".to_string()]);
    }

    #[test]
    fn comparison_serializes_with_outcome_tag() {
        let json = serde_json::to_value(Comparison::NoAffordableAlternative).unwrap();
        assert_eq!(json["outcome"], "no_affordable_alternative");
    }
}
