//! Alternative - a purchase option rated against the session's criteria.

use serde::{Deserialize, Serialize};

use super::criterion::{same_name, Criterion};
use crate::domain::foundation::{Money, Rating, ValidationError};

/// A fully specified purchase alternative.
///
/// # Invariants
///
/// - `name` is non-empty
/// - criterion names are unique (case-insensitive) and never `affordability`
/// - `criteria` keep insertion order, which is also display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    name: String,
    price: Option<Money>,
    criteria: Vec<Criterion>,
}

impl Alternative {
    /// Creates an alternative with no price and no criteria.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("alternative"));
        }
        Ok(Self {
            name,
            price: None,
            criteria: Vec::new(),
        })
    }

    /// Sets the price.
    pub fn with_price(mut self, price: Money) -> Self {
        self.price = Some(price);
        self
    }

    /// Appends a rated criterion.
    pub fn with_criterion(
        mut self,
        name: impl Into<String>,
        rating: Rating,
    ) -> Result<Self, ValidationError> {
        self.push_criterion(Criterion::new(name, rating)?)?;
        Ok(self)
    }

    /// Appends a criterion, rejecting duplicates.
    pub fn push_criterion(&mut self, criterion: Criterion) -> Result<(), ValidationError> {
        if self.criteria.iter().any(|c| same_name(&c.name, &criterion.name)) {
            return Err(ValidationError::duplicate("criteria", criterion.name));
        }
        self.criteria.push(criterion);
        Ok(())
    }

    /// Returns the alternative's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the price, if set.
    pub fn price(&self) -> Option<Money> {
        self.price
    }

    /// Returns the criteria in display order.
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }
}
