//! Application configuration module
//!
//! This module provides type-safe configuration loading from an optional
//! config file and environment variables using the `config` and `dotenvy`
//! crates. Environment variables use the `RATIONAL_CHOICE` prefix and nested
//! values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use rational_choice::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Default budget: {}", config.scoring.default_budget);
//! ```

mod error;
mod explainer;
mod logging;
mod scoring;

pub use error::{ConfigError, ValidationError};
pub use explainer::ExplainerConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use scoring::ScoringConfig;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming an optional config file.
pub const CONFIG_FILE_ENV: &str = "RATIONAL_CHOICE_CONFIG";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Defaults for new comparison sessions
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Explanation settings
    #[serde(default)]
    pub explainer: ExplainerConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads the file named by `RATIONAL_CHOICE_CONFIG`, if set
    /// 3. Reads environment variables with `RATIONAL_CHOICE` prefix
    /// 4. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `RATIONAL_CHOICE__SCORING__DEFAULT_BUDGET=50000` -> `scoring.default_budget = 50000`
    /// - `RATIONAL_CHOICE__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or values cannot be
    /// parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let file = std::env::var_os(CONFIG_FILE_ENV).map(PathBuf::from);
        Self::load_from(file.as_deref())
    }

    /// Load configuration from an explicit file plus the environment
    ///
    /// Environment variables override file values.
    pub fn load_from(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("RATIONAL_CHOICE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.scoring.validate()?;
        self.explainer.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
