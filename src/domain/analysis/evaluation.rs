//! Evaluation Aggregator - per-criterion scores and the value index.

use serde::Serialize;

use super::{score_affordability, ScoringError};
use crate::domain::choice::{Alternative, AFFORDABILITY};
use crate::domain::foundation::{Money, Score};

/// One scored line of an evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationEntry {
    pub criterion: String,
    pub score: Score,
}

/// Derived scores for one alternative against one budget.
///
/// Entries follow the alternative's criterion order, with the synthetic
/// `affordability` entry last. Recompute whenever inputs change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    alternative: String,
    price: Money,
    over_budget: bool,
    entries: Vec<EvaluationEntry>,
    value_index: Score,
}

impl Evaluation {
    /// Evaluates an alternative within a budget.
    ///
    /// # Errors
    ///
    /// - `IncompleteInput` if the alternative has no price
    pub fn for_alternative(alternative: &Alternative, budget: Money) -> Result<Self, ScoringError> {
        let price = alternative
            .price()
            .ok_or_else(|| ScoringError::incomplete(format!("price of {}", alternative.name())))?;

        let mut entries: Vec<EvaluationEntry> = alternative
            .criteria()
            .iter()
            .map(|c| EvaluationEntry {
                criterion: c.name.clone(),
                score: Score::new(c.rating.as_f64()),
            })
            .collect();
        entries.push(EvaluationEntry {
            criterion: AFFORDABILITY.to_string(),
            score: score_affordability(price, budget),
        });

        let value_index = value_index(entries.iter().map(|e| e.score));

        Ok(Self {
            alternative: alternative.name().to_string(),
            price,
            over_budget: price.exceeds(budget),
            entries,
            value_index,
        })
    }

    /// Returns the evaluated alternative's name.
    pub fn alternative(&self) -> &str {
        &self.alternative
    }

    /// Returns the alternative's price.
    pub fn price(&self) -> Money {
        self.price
    }

    /// Returns true if the price exceeds the budget.
    pub fn is_over_budget(&self) -> bool {
        self.over_budget
    }

    /// Returns all entries in display order.
    pub fn entries(&self) -> &[EvaluationEntry] {
        &self.entries
    }

    /// Returns the score for a criterion, if present.
    pub fn score_for(&self, criterion: &str) -> Option<Score> {
        self.entries
            .iter()
            .find(|e| e.criterion == criterion)
            .map(|e| e.score)
    }

    /// Returns the affordability score.
    pub fn affordability(&self) -> Score {
        self.score_for(AFFORDABILITY).unwrap_or_default()
    }

    /// Returns the mean of every entry.
    pub fn value_index(&self) -> Score {
        self.value_index
    }
}

/// Arithmetic mean of scores, every score weighted equally.
///
/// Returns zero for an empty input.
pub fn value_index<I>(scores: I) -> Score
where
    I: IntoIterator<Item = Score>,
{
    let (sum, count) = scores
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), s| (sum + s.value(), n + 1));
    if count == 0 {
        return Score::ZERO;
    }
    Score::new(sum / count as f64)
}
