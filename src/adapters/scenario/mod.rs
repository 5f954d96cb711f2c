//! Scenario file adapter.
//!
//! Loads YAML or JSON scenario files and turns them into session inputs.

mod scenario_file;

pub use scenario_file::{Scenario, ScenarioAlternative, ScenarioError, ScenarioFormat};
