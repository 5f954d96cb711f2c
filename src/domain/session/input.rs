//! Session input events.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two compared alternatives an input targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    A,
    B,
}

impl Slot {
    /// Both slots in display order.
    pub const ALL: [Slot; 2] = [Slot::A, Slot::B];

    pub(crate) fn index(self) -> usize {
        match self {
            Slot::A => 0,
            Slot::B => 1,
        }
    }

    /// Name used when the student has not named the alternative.
    pub fn default_name(self) -> &'static str {
        match self {
            Slot::A => "Alternative A",
            Slot::B => "Alternative B",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::A => write!(f, "A"),
            Slot::B => write!(f, "B"),
        }
    }
}

/// One user interaction. A session applies exactly one input at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionInput {
    SetBudget { amount: f64 },
    SelectTheme { theme: String },
    AddCriterion { name: String },
    RemoveCriterion { name: String },
    NameAlternative { slot: Slot, name: String },
    SetPrice { slot: Slot, price: f64 },
    Rate { slot: Slot, criterion: String, rating: i64 },
}

impl SessionInput {
    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            SessionInput::SetBudget { .. } => "set_budget",
            SessionInput::SelectTheme { .. } => "select_theme",
            SessionInput::AddCriterion { .. } => "add_criterion",
            SessionInput::RemoveCriterion { .. } => "remove_criterion",
            SessionInput::NameAlternative { .. } => "name_alternative",
            SessionInput::SetPrice { .. } => "set_price",
            SessionInput::Rate { .. } => "rate",
        }
    }
}
