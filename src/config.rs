//! Planner configuration.
//!
//! Everything has a built-in default, so running without a config file is fine:
//!
//! ```toml
//! strategy = "model_based"
//!
//! [search]
//! node_budget = 1000
//! max_schedule_moves = 3
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Which planner answers the snapshots.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizerType {
    /// Single-step greedy rules, no look-ahead.
    RuleBased,
    /// Bounded depth first search over the block relocation problem.
    #[default]
    ModelBased,
}

/// Limits of the model based search.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SearchConfig {
    /// Maximum number of states popped from the frontier per invocation.
    pub node_budget: usize,

    /// Maximum number of moves handed to the crane per schedule.
    pub max_schedule_moves: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            node_budget: 1000,
            max_schedule_moves: 3,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct PlannerConfig {
    pub strategy: OptimizerType,
    pub search: SearchConfig,
}

impl PlannerConfig {
    /// Loads and validates configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.max_schedule_moves == 0 {
            return Err(ConfigError::Invalid(
                "max_schedule_moves must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_strategy(mut self, strategy: OptimizerType) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_node_budget(mut self, budget: usize) -> Self {
        self.search.node_budget = budget;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.strategy, OptimizerType::ModelBased);
        assert_eq!(config.search.node_budget, 1000);
        assert_eq!(config.search.max_schedule_moves, 3);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = PlannerConfig::from_toml_str("").unwrap();
        assert_eq!(config, PlannerConfig::default());
    }

    #[test]
    fn test_toml_parsing() {
        let toml = r#"
            strategy = "rule_based"

            [search]
            node_budget = 50
        "#;

        let config = PlannerConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.strategy, OptimizerType::RuleBased);
        assert_eq!(config.search.node_budget, 50);
        assert_eq!(config.search.max_schedule_moves, 3);
    }

    #[test]
    fn test_zero_schedule_cap_is_rejected() {
        let toml = r#"
            [search]
            max_schedule_moves = 0
        "#;

        let err = PlannerConfig::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        let err = PlannerConfig::from_toml_str(r#"strategy = "annealing""#).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = PlannerConfig::load("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_builder() {
        let config = PlannerConfig::default()
            .with_strategy(OptimizerType::RuleBased)
            .with_node_budget(0);
        assert_eq!(config.strategy, OptimizerType::RuleBased);
        assert_eq!(config.search.node_budget, 0);
    }
}
