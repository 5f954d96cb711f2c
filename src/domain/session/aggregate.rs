//! Comparison session aggregate.
//!
//! A session holds everything one student has entered for one comparison:
//! budget, theme, criteria, and the two alternative drafts. It is created per
//! user session, mutated only through [`ComparisonSession::apply`] one input at
//! a time, and discarded after [`ComparisonSession::end`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{SessionError, SessionInput, Slot};
use crate::domain::analysis::{compare, validate_budget, Comparison, Evaluation, ScoringError};
use crate::domain::choice::{find_theme, normalize_name, same_name, Alternative, Criterion};
use crate::domain::foundation::{
    Money, Rating, SessionId, SessionStatus, Timestamp, ValidationError,
};

/// What the student has entered so far for one alternative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlternativeDraft {
    pub name: Option<String>,
    pub price: Option<Money>,
    pub ratings: HashMap<String, Rating>,
}

/// Session aggregate - explicit per-user comparison context.
///
/// # Invariants
///
/// - criterion names are unique (case-insensitive) and never `affordability`
/// - ratings only exist for criteria the session currently has
/// - ended sessions cannot be modified
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSession {
    id: SessionId,
    status: SessionStatus,
    budget: Option<Money>,
    theme: Option<String>,
    theme_criteria: Vec<String>,
    custom_criteria: Vec<String>,
    drafts: [AlternativeDraft; 2],
    default_rating: Option<Rating>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl ComparisonSession {
    /// Creates a new active session.
    ///
    /// `default_rating` seeds every newly added criterion; `None` leaves
    /// ratings unset until the student enters them.
    pub fn new(id: SessionId, budget: Option<Money>, default_rating: Option<Rating>) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            status: SessionStatus::Active,
            budget,
            theme: None,
            theme_criteria: Vec::new(),
            custom_criteria: Vec::new(),
            drafts: Default::default(),
            default_rating,
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn budget(&self) -> Option<Money> {
        self.budget
    }

    /// Returns the selected theme key.
    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    /// Returns the active criteria: theme defaults first, then custom ones.
    pub fn criteria(&self) -> Vec<&str> {
        self.theme_criteria
            .iter()
            .chain(self.custom_criteria.iter())
            .map(String::as_str)
            .collect()
    }

    pub fn draft(&self, slot: Slot) -> &AlternativeDraft {
        &self.drafts[slot.index()]
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies one input event.
    ///
    /// # Errors
    ///
    /// - `Ended` if the session has ended
    /// - `Validation` / `Scoring` for malformed values
    /// - `UnknownTheme` / `UnknownCriterion` for names the session doesn't know
    pub fn apply(&mut self, input: SessionInput) -> Result<(), SessionError> {
        self.ensure_mutable()?;

        match input {
            SessionInput::SetBudget { amount } => {
                self.budget = Some(validate_budget(Some(amount))?);
            }
            SessionInput::SelectTheme { theme } => self.select_theme(&theme)?,
            SessionInput::AddCriterion { name } => self.add_criterion(name)?,
            SessionInput::RemoveCriterion { name } => self.remove_criterion(&name)?,
            SessionInput::NameAlternative { slot, name } => {
                let name = name.trim().to_string();
                if name.is_empty() {
                    return Err(ValidationError::empty_field("alternative").into());
                }
                self.drafts[slot.index()].name = Some(name);
            }
            SessionInput::SetPrice { slot, price } => {
                self.drafts[slot.index()].price = Some(Money::try_new_for("price", price)?);
            }
            SessionInput::Rate {
                slot,
                criterion,
                rating,
            } => {
                let canonical = self
                    .find_criterion(&criterion)
                    .ok_or_else(|| SessionError::unknown_criterion(criterion.trim()))?;
                let rating = Rating::try_from_i64(rating)?;
                self.drafts[slot.index()].ratings.insert(canonical, rating);
            }
        }

        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Ends the session.
    ///
    /// # Errors
    ///
    /// - `Ended` if already ended
    pub fn end(&mut self) -> Result<(), SessionError> {
        if !self.status.can_transition_to(&SessionStatus::Ended) {
            return Err(SessionError::Ended);
        }
        self.status = SessionStatus::Ended;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Scoring
    // ─────────────────────────────────────────────────────────────────────────

    /// Builds the fully specified alternative for a slot.
    ///
    /// # Errors
    ///
    /// - `IncompleteInput` if a criterion has no rating
    pub fn alternative(&self, slot: Slot) -> Result<Alternative, ScoringError> {
        let draft = self.draft(slot);
        let name = draft.name.as_deref().unwrap_or(slot.default_name());

        let mut alternative = Alternative::new(name)?;
        if let Some(price) = draft.price {
            alternative = alternative.with_price(price);
        }
        for criterion in self.criteria() {
            let rating = draft.ratings.get(criterion).copied().ok_or_else(|| {
                ScoringError::incomplete(format!("{} rating for {}", criterion, name))
            })?;
            alternative.push_criterion(Criterion::new(criterion, rating)?)?;
        }
        Ok(alternative)
    }

    /// Evaluates both alternatives against the current budget.
    ///
    /// # Errors
    ///
    /// - `InvalidBudget` if no budget has been set
    /// - `IncompleteInput` if a price or rating is missing
    pub fn evaluations(&self) -> Result<[Evaluation; 2], ScoringError> {
        let budget = self.require_budget()?;
        let a = Evaluation::for_alternative(&self.alternative(Slot::A)?, budget)?;
        let b = Evaluation::for_alternative(&self.alternative(Slot::B)?, budget)?;
        Ok([a, b])
    }

    /// Scores and compares the two alternatives.
    ///
    /// The unaffordable notice is reported as soon as both prices are known,
    /// even if ratings are still missing.
    pub fn compare(&self) -> Result<Comparison, ScoringError> {
        let budget = self.require_budget()?;
        let prices = [self.draft(Slot::A).price, self.draft(Slot::B).price];
        if prices.iter().all(|p| p.is_some_and(|p| p.exceeds(budget))) {
            return Ok(Comparison::NoAffordableAlternative);
        }

        let [a, b] = self.evaluations()?;
        compare(&a, &b)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn ensure_mutable(&self) -> Result<(), SessionError> {
        if self.status.is_mutable() {
            Ok(())
        } else {
            Err(SessionError::Ended)
        }
    }

    fn require_budget(&self) -> Result<Money, ScoringError> {
        self.budget
            .ok_or_else(|| ScoringError::invalid_budget("no budget was entered"))
    }

    fn find_criterion(&self, name: &str) -> Option<String> {
        self.criteria()
            .into_iter()
            .find(|c| same_name(c, name))
            .map(str::to_string)
    }

    fn select_theme(&mut self, name: &str) -> Result<(), SessionError> {
        let theme = find_theme(name).ok_or_else(|| SessionError::unknown_theme(name.trim()))?;

        self.theme = Some(theme.key.to_string());
        self.theme_criteria = theme.criteria.iter().map(|c| c.to_string()).collect();
        // Theme defaults take precedence over a custom criterion of the same name.
        let defaults = self.theme_criteria.clone();
        self.custom_criteria
            .retain(|c| !defaults.iter().any(|d| same_name(d, c)));

        for criterion in defaults {
            self.seed_rating(&criterion);
        }
        self.prune_ratings();
        Ok(())
    }

    fn add_criterion(&mut self, name: String) -> Result<(), SessionError> {
        let name = normalize_name(name)?;
        if self.find_criterion(&name).is_some() {
            return Err(ValidationError::duplicate("criteria", name).into());
        }
        self.seed_rating(&name);
        self.custom_criteria.push(name);
        Ok(())
    }

    fn remove_criterion(&mut self, name: &str) -> Result<(), SessionError> {
        let canonical = self
            .find_criterion(name)
            .ok_or_else(|| SessionError::unknown_criterion(name.trim()))?;
        self.theme_criteria.retain(|c| c != &canonical);
        self.custom_criteria.retain(|c| c != &canonical);
        self.prune_ratings();
        Ok(())
    }

    fn seed_rating(&mut self, criterion: &str) {
        if let Some(rating) = self.default_rating {
            for draft in &mut self.drafts {
                draft.ratings.entry(criterion.to_string()).or_insert(rating);
            }
        }
    }

    fn prune_ratings(&mut self) {
        let active: Vec<String> = self.criteria().into_iter().map(str::to_string).collect();
        for draft in &mut self.drafts {
            draft.ratings.retain(|name, _| active.contains(name));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::choice::AFFORDABILITY;

    fn session() -> ComparisonSession {
        ComparisonSession::new(SessionId::new(), None, None)
    }

    fn seeded_session() -> ComparisonSession {
        ComparisonSession::new(
            SessionId::new(),
            Some(Money::try_new(30000.0).unwrap()),
            Some(Rating::NEUTRAL),
        )
    }

    fn apply_all(session: &mut ComparisonSession, inputs: Vec<SessionInput>) {
        for input in inputs {
            session.apply(input).unwrap();
        }
    }

    fn rate(slot: Slot, criterion: &str, rating: i64) -> SessionInput {
        SessionInput::Rate {
            slot,
            criterion: criterion.to_string(),
            rating,
        }
    }

    #[test]
    fn new_session_is_active_and_empty() {
        let s = session();
        assert_eq!(s.status(), SessionStatus::Active);
        assert!(s.budget().is_none());
        assert!(s.criteria().is_empty());
    }

    #[test]
    fn selecting_theme_seeds_default_criteria() {
        let mut s = seeded_session();
        s.apply(SessionInput::SelectTheme {
            theme: "food".to_string(),
        })
        .unwrap();

        assert_eq!(s.theme(), Some("food"));
        assert_eq!(s.criteria(), vec!["taste", "portion", "delivery speed"]);
        assert_eq!(s.draft(Slot::A).ratings.get("taste"), Some(&Rating::NEUTRAL));
    }

    #[test]
    fn custom_criteria_follow_theme_defaults() {
        let mut s = seeded_session();
        apply_all(
            &mut s,
            vec![
                SessionInput::AddCriterion {
                    name: "brand value".to_string(),
                },
                SessionInput::SelectTheme {
                    theme: "shoes".to_string(),
                },
            ],
        );

        assert_eq!(s.criteria(), vec!["design", "comfort", "durability", "brand value"]);
    }

    #[test]
    fn switching_theme_drops_old_defaults_and_their_ratings() {
        let mut s = seeded_session();
        apply_all(
            &mut s,
            vec![
                SessionInput::SelectTheme {
                    theme: "food".to_string(),
                },
                SessionInput::SelectTheme {
                    theme: "bags".to_string(),
                },
            ],
        );

        assert_eq!(s.criteria(), vec!["design", "storage space", "weight"]);
        assert!(!s.draft(Slot::B).ratings.contains_key("taste"));
    }

    #[test]
    fn duplicate_criterion_is_rejected() {
        let mut s = seeded_session();
        s.apply(SessionInput::SelectTheme {
            theme: "food".to_string(),
        })
        .unwrap();

        let result = s.apply(SessionInput::AddCriterion {
            name: "Taste".to_string(),
        });
        assert!(matches!(
            result,
            Err(SessionError::Validation(ValidationError::Duplicate { .. }))
        ));
    }

    #[test]
    fn affordability_cannot_be_added_by_hand() {
        let mut s = session();
        let result = s.apply(SessionInput::AddCriterion {
            name: AFFORDABILITY.to_string(),
        });
        assert!(matches!(result, Err(SessionError::Validation(_))));
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let mut s = session();
        let result = s.apply(SessionInput::SelectTheme {
            theme: "cars".to_string(),
        });
        assert_eq!(result, Err(SessionError::unknown_theme("cars")));
    }

    #[test]
    fn rating_unknown_criterion_is_rejected() {
        let mut s = session();
        let result = s.apply(rate(Slot::A, "taste", 5));
        assert_eq!(result, Err(SessionError::unknown_criterion("taste")));
    }

    #[test]
    fn rating_out_of_range_is_rejected() {
        let mut s = seeded_session();
        s.apply(SessionInput::SelectTheme {
            theme: "food".to_string(),
        })
        .unwrap();
        assert!(s.apply(rate(Slot::A, "taste", 11)).is_err());
        assert!(s.apply(rate(Slot::A, "taste", -1)).is_err());
    }

    #[test]
    fn rating_matches_criterion_case_insensitively() {
        let mut s = seeded_session();
        apply_all(
            &mut s,
            vec![
                SessionInput::SelectTheme {
                    theme: "food".to_string(),
                },
                rate(Slot::A, "TASTE", 9),
            ],
        );
        assert_eq!(
            s.draft(Slot::A).ratings.get("taste"),
            Some(&Rating::try_new(9).unwrap())
        );
    }

    #[test]
    fn negative_budget_is_invalid() {
        let mut s = session();
        let result = s.apply(SessionInput::SetBudget { amount: -100.0 });
        assert!(matches!(
            result,
            Err(SessionError::Scoring(ScoringError::InvalidBudget { .. }))
        ));
    }

    #[test]
    fn compare_without_budget_is_invalid_budget() {
        let s = session();
        assert!(matches!(s.compare(), Err(ScoringError::InvalidBudget { .. })));
    }

    #[test]
    fn compare_with_missing_rating_is_incomplete() {
        let mut s = session();
        apply_all(
            &mut s,
            vec![
                SessionInput::SetBudget { amount: 30000.0 },
                SessionInput::AddCriterion {
                    name: "taste".to_string(),
                },
                SessionInput::SetPrice {
                    slot: Slot::A,
                    price: 20000.0,
                },
                SessionInput::SetPrice {
                    slot: Slot::B,
                    price: 10000.0,
                },
                rate(Slot::A, "taste", 8),
            ],
        );

        assert_eq!(
            s.compare(),
            Err(ScoringError::incomplete("taste rating for Alternative B"))
        );
    }

    #[test]
    fn compare_with_missing_price_is_incomplete() {
        let mut s = seeded_session();
        s.apply(SessionInput::SetPrice {
            slot: Slot::A,
            price: 20000.0,
        })
        .unwrap();

        assert_eq!(
            s.compare(),
            Err(ScoringError::incomplete("price of Alternative B"))
        );
    }

    #[test]
    fn both_over_budget_reported_before_missing_ratings() {
        let mut s = session();
        apply_all(
            &mut s,
            vec![
                SessionInput::SetBudget { amount: 10000.0 },
                SessionInput::AddCriterion {
                    name: "taste".to_string(),
                },
                SessionInput::SetPrice {
                    slot: Slot::A,
                    price: 20000.0,
                },
                SessionInput::SetPrice {
                    slot: Slot::B,
                    price: 15000.0,
                },
            ],
        );

        assert_eq!(s.compare(), Ok(Comparison::NoAffordableAlternative));
    }

    #[test]
    fn full_session_produces_a_decision() {
        let mut s = seeded_session();
        apply_all(
            &mut s,
            vec![
                SessionInput::SelectTheme {
                    theme: "food".to_string(),
                },
                SessionInput::NameAlternative {
                    slot: Slot::A,
                    name: "pizza".to_string(),
                },
                SessionInput::NameAlternative {
                    slot: Slot::B,
                    name: "fried chicken".to_string(),
                },
                SessionInput::SetPrice {
                    slot: Slot::A,
                    price: 20000.0,
                },
                SessionInput::SetPrice {
                    slot: Slot::B,
                    price: 35000.0,
                },
                rate(Slot::A, "taste", 8),
                rate(Slot::A, "portion", 7),
                rate(Slot::A, "delivery speed", 6),
                rate(Slot::B, "taste", 10),
            ],
        );

        let result = s.compare().unwrap();
        // pizza: (8 + 7 + 6 + 3.33) / 4 = 6.08; chicken: (10 + 5 + 5 + 0) / 4 = 5.0
        assert_eq!(result.winner(), Some("pizza"));
        assert_eq!(result.margin(), 1.1);
        assert_eq!(result.lost_advantages(), &["taste".to_string()]);
    }

    #[test]
    fn ended_session_rejects_input() {
        let mut s = session();
        s.end().unwrap();

        assert_eq!(s.status(), SessionStatus::Ended);
        assert_eq!(
            s.apply(SessionInput::SetBudget { amount: 100.0 }),
            Err(SessionError::Ended)
        );
        assert_eq!(s.end(), Err(SessionError::Ended));
    }

    #[test]
    fn apply_touches_updated_at() {
        let mut s = session();
        let before = *s.updated_at();
        s.apply(SessionInput::SetBudget { amount: 100.0 }).unwrap();
        assert!(s.updated_at() >= &before);
    }
}
