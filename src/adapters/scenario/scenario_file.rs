//! Scenario files - a whole comparison written down as YAML or JSON.
//!
//! A scenario is replayed as the sequence of `SessionInput` events a student
//! would have entered by hand.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use tokio::fs;

use crate::domain::session::{SessionInput, Slot};

/// Errors raised while reading a scenario file.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Failed to read scenario {path}: {message}")]
    Io { path: String, message: String },

    #[error("Unsupported scenario format '{0}': expected .yaml, .yml or .json")]
    UnsupportedFormat(String),

    #[error("Failed to parse {format} scenario: {message}")]
    Parse {
        format: ScenarioFormat,
        message: String,
    },

    #[error("A scenario compares exactly two alternatives, found {0}")]
    AlternativeCount(usize),
}

/// Serialization format of a scenario file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioFormat {
    Yaml,
    Json,
}

impl ScenarioFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ScenarioError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(ScenarioError::UnsupportedFormat(ext)),
        }
    }
}

impl std::fmt::Display for ScenarioFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yaml => write!(f, "YAML"),
            Self::Json => write!(f, "JSON"),
        }
    }
}

/// A comparison written down in full.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Overrides the configured default budget when present.
    #[serde(default)]
    pub budget: Option<f64>,

    /// Theme key or label; seeds the default criteria.
    #[serde(default)]
    pub theme: Option<String>,

    /// Custom criteria, appended after the theme defaults.
    #[serde(default)]
    pub criteria: Vec<String>,

    pub alternatives: Vec<ScenarioAlternative>,
}

/// One alternative in a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioAlternative {
    pub name: String,

    #[serde(default)]
    pub price: Option<f64>,

    /// Ratings by criterion name.
    #[serde(default)]
    pub ratings: BTreeMap<String, i64>,
}

impl Scenario {
    /// Parses scenario text in the given format.
    pub fn parse(content: &str, format: ScenarioFormat) -> Result<Self, ScenarioError> {
        let parsed = match format {
            ScenarioFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            ScenarioFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| ScenarioError::Parse { format, message })
    }

    /// Reads and parses a scenario file, choosing the format by extension.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let format = ScenarioFormat::from_path(path)?;
        let content = fs::read_to_string(path).await.map_err(|e| ScenarioError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&content, format)
    }

    /// Converts the scenario into session inputs, in entry order.
    ///
    /// # Errors
    ///
    /// - `AlternativeCount` unless there are exactly two alternatives
    pub fn to_inputs(&self) -> Result<Vec<SessionInput>, ScenarioError> {
        if self.alternatives.len() != Slot::ALL.len() {
            return Err(ScenarioError::AlternativeCount(self.alternatives.len()));
        }

        let mut inputs = Vec::new();
        if let Some(amount) = self.budget {
            inputs.push(SessionInput::SetBudget { amount });
        }
        if let Some(theme) = &self.theme {
            inputs.push(SessionInput::SelectTheme {
                theme: theme.clone(),
            });
        }
        inputs.extend(
            self.criteria
                .iter()
                .map(|name| SessionInput::AddCriterion { name: name.clone() }),
        );

        for (slot, alternative) in Slot::ALL.into_iter().zip(&self.alternatives) {
            inputs.push(SessionInput::NameAlternative {
                slot,
                name: alternative.name.clone(),
            });
            if let Some(price) = alternative.price {
                inputs.push(SessionInput::SetPrice { slot, price });
            }
            inputs.extend(alternative.ratings.iter().map(|(criterion, rating)| {
                SessionInput::Rate {
                    slot,
                    criterion: criterion.clone(),
                    rating: *rating,
                }
            }));
        }

        Ok(inputs)
    }
}
