//! Criterion - a named, rated aspect of an alternative.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Rating, ValidationError};

/// Name of the synthetic criterion derived from price and budget.
pub const AFFORDABILITY: &str = "affordability";

/// A named criterion with the user's satisfaction rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    pub rating: Rating,
}

impl Criterion {
    /// Creates a criterion, validating its name.
    pub fn new(name: impl Into<String>, rating: Rating) -> Result<Self, ValidationError> {
        Ok(Self {
            name: normalize_name(name)?,
            rating,
        })
    }
}

/// Trims a criterion name and rejects empty or reserved names.
pub fn normalize_name(name: impl Into<String>) -> Result<String, ValidationError> {
    let name = name.into().trim().to_string();
    if name.is_empty() {
        return Err(ValidationError::empty_field("criterion"));
    }
    if is_reserved(&name) {
        return Err(ValidationError::invalid_format(
            "criterion",
            format!("'{}' is computed from price and budget", AFFORDABILITY),
        ));
    }
    Ok(name)
}

/// Returns true if `name` collides with the synthetic affordability criterion.
pub fn is_reserved(name: &str) -> bool {
    same_name(name, AFFORDABILITY)
}

/// Case-insensitive name comparison used for uniqueness checks.
pub fn same_name(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
