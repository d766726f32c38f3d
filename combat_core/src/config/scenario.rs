//! Scenario configuration loading

use super::ConfigError;
use crate::damage::Attack;
use crate::defense::{DefenderProfile, Shield};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// A named combat setup: one defender, their shields, and an attack
/// sequence to resolve against them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub defender: DefenderProfile,
    #[serde(default)]
    pub shields: Vec<Shield>,
    #[serde(default)]
    pub attacks: Vec<Attack>,
}

/// Container for scenario configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenariosConfig {
    #[serde(rename = "scenarios")]
    pub scenarios: Vec<Scenario>,
}

/// Load scenario configurations from a TOML file
pub fn load_scenario_configs(path: &Path) -> Result<HashMap<String, Scenario>, ConfigError> {
    let config: ScenariosConfig = super::load_toml(path)?;

    let mut map = HashMap::new();
    for scenario in config.scenarios {
        map.insert(scenario.name.clone(), scenario);
    }

    Ok(map)
}

/// Load scenario configurations from a TOML string
pub fn parse_scenario_configs(content: &str) -> Result<HashMap<String, Scenario>, ConfigError> {
    let config: ScenariosConfig = super::parse_toml(content)?;

    let mut map = HashMap::new();
    for scenario in config.scenarios {
        map.insert(scenario.name.clone(), scenario);
    }

    Ok(map)
}

/// Get the bundled example scenarios
pub fn default_scenarios() -> HashMap<String, Scenario> {
    let toml = include_str!("../../config/scenarios.toml");
    parse_scenario_configs(toml).unwrap_or_else(|_| {
        let mut map = HashMap::new();
        map.insert(
            "plain_hit".to_string(),
            Scenario {
                name: "plain_hit".to_string(),
                defender: DefenderProfile::new(20.0, 0.0, 0.0),
                shields: Vec::new(),
                attacks: vec![Attack::new(100.0)],
            },
        );
        map
    })
}
