//! Affordability Scorer - converts price and budget into a 0-10 score.

use crate::domain::foundation::{Money, Score};

use super::ScoringError;

/// Scores how affordable `price` is within `budget`.
///
/// # Algorithm
/// - `price > budget` or `budget == 0`: 0
/// - otherwise: `(1 - price / budget) * 10`
///
/// A price equal to the budget scores 0 and a free item scores 10.
pub fn score_affordability(price: Money, budget: Money) -> Score {
    if budget.is_zero() || price.exceeds(budget) {
        return Score::ZERO;
    }
    Score::new((1.0 - price.value() / budget.value()) * 10.0)
}

/// Validates raw budget input before any scoring happens.
///
/// # Errors
///
/// - `InvalidBudget` if the budget is missing, negative, or not finite
pub fn validate_budget(budget: Option<f64>) -> Result<Money, ScoringError> {
    let raw = budget.ok_or_else(|| ScoringError::invalid_budget("no budget was entered"))?;
    Money::try_new_for("budget", raw).map_err(|e| ScoringError::invalid_budget(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(v: f64) -> Money {
        Money::try_new(v).unwrap()
    }

    #[test]
    fn price_equal_to_budget_scores_zero() {
        assert_eq!(score_affordability(money(30000.0), money(30000.0)), Score::ZERO);
    }

    #[test]
    fn free_item_scores_ten() {
        assert_eq!(score_affordability(money(0.0), money(30000.0)), Score::TEN);
    }

    #[test]
    fn zero_budget_scores_zero() {
        assert_eq!(score_affordability(money(0.0), money(0.0)), Score::ZERO);
        assert_eq!(score_affordability(money(500.0), money(0.0)), Score::ZERO);
    }

    #[test]
    fn over_budget_scores_zero() {
        assert_eq!(score_affordability(money(35000.0), money(30000.0)), Score::ZERO);
    }

    #[test]
    fn interpolates_linearly_within_budget() {
        let score = score_affordability(money(20000.0), money(30000.0));
        assert!((score.value() - 10.0 / 3.0).abs() < 1e-9);

        let half = score_affordability(money(15000.0), money(30000.0));
        assert!((half.value() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn validate_budget_rejects_missing_and_negative() {
        assert!(matches!(
            validate_budget(None),
            Err(ScoringError::InvalidBudget { .. })
        ));
        assert!(matches!(
            validate_budget(Some(-1.0)),
            Err(ScoringError::InvalidBudget { .. })
        ));
        assert!(matches!(
            validate_budget(Some(f64::NAN)),
            Err(ScoringError::InvalidBudget { .. })
        ));
    }

    #[test]
    fn validate_budget_accepts_zero() {
        assert_eq!(validate_budget(Some(0.0)).unwrap(), Money::ZERO);
    }
}
