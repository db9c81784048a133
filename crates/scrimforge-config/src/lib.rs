//! Configuration system for ScrimForge.
//!
//! Load balancing configuration from TOML or YAML files to control team
//! size, capacity, tie-breaking, scoring and search strategy without code
//! changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use scrimforge_config::{BalanceConfig, CapacityPolicy, StrategyConfig};
//!
//! let config = BalanceConfig::from_toml_str(r#"
//!     team_size = 5
//!     capacity = "uncapped"
//!
//!     [scoring]
//!     type = "ladder"
//!
//!     [strategy]
//!     type = "exhaustive"
//!     node_limit = 5000
//! "#).unwrap();
//!
//! assert_eq!(config.team_size().get(), 5);
//! assert_eq!(config.capacity, CapacityPolicy::Uncapped);
//! assert_eq!(config.strategy, StrategyConfig::Exhaustive { node_limit: 5000 });
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use scrimforge_config::BalanceConfig;
//!
//! let config = BalanceConfig::load("balance.toml").unwrap_or_default();
//! assert_eq!(config.team_size, 5);
//! ```

use std::path::Path;

use scrimforge_core::TeamSize;
use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Default node budget for the exhaustive split search.
pub const DEFAULT_NODE_LIMIT: u64 = 100_000;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main balancing configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct BalanceConfig {
    /// Players per team.
    pub team_size: usize,

    /// Whether a team may receive more than `team_size` players.
    pub capacity: CapacityPolicy,

    /// Ordering of players with equal scores.
    pub tie_break: TieBreak,

    /// Seed for [`TieBreak::Seeded`].
    pub random_seed: Option<u64>,

    /// Player scoring model.
    pub scoring: ScoringConfig,

    /// Partitioning strategy.
    pub strategy: StrategyConfig,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            team_size: 5,
            capacity: CapacityPolicy::default(),
            tie_break: TieBreak::default(),
            random_seed: None,
            scoring: ScoringConfig::default(),
            strategy: StrategyConfig::default(),
        }
    }
}

impl BalanceConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.team_size == 0 {
            return Err(ConfigError::Invalid(
                "team_size must be at least 1".to_string(),
            ));
        }
        if self.tie_break == TieBreak::Seeded && self.random_seed.is_none() {
            return Err(ConfigError::Invalid(
                "tie_break = \"seeded\" requires random_seed".to_string(),
            ));
        }
        if let StrategyConfig::Exhaustive { node_limit: 0 } = self.strategy {
            return Err(ConfigError::Invalid(
                "exhaustive node_limit must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Team size as a validated value. Falls back to the default for zero,
    /// which [`validate`](Self::validate) rejects.
    pub fn team_size(&self) -> TeamSize {
        TeamSize::new(self.team_size).unwrap_or_default()
    }

    /// Sets the team size.
    pub fn with_team_size(mut self, team_size: usize) -> Self {
        self.team_size = team_size;
        self
    }

    /// Sets the capacity policy.
    pub fn with_capacity(mut self, capacity: CapacityPolicy) -> Self {
        self.capacity = capacity;
        self
    }

    /// Switches to seeded tie-breaking with the given seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self.tie_break = TieBreak::Seeded;
        self
    }

    /// Sets the scoring model.
    pub fn with_scoring(mut self, scoring_type: ScoringType) -> Self {
        self.scoring = ScoringConfig { scoring_type };
        self
    }

    /// Sets the partitioning strategy.
    pub fn with_strategy(mut self, strategy: StrategyConfig) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Per-team size constraint during greedy assignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityPolicy {
    /// Teams stop receiving players once full. Among open teams the one with
    /// the fewest members wins, then the lowest total.
    #[default]
    Capped,

    /// Always feed the team with the lowest total, regardless of size.
    Uncapped,
}

/// Ordering of players whose scores are equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Keep roster order (stable sort).
    #[default]
    InputOrder,

    /// Shuffle each run of equal scores with a seeded RNG.
    Seeded,
}

/// Scoring configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ScoringConfig {
    /// Scoring model.
    #[serde(rename = "type", default)]
    pub scoring_type: ScoringType,
}

/// Scoring models.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringType {
    /// 1..=10 tier table with division adjustment.
    #[default]
    Tier,

    /// Ladder points blended with recent win rate.
    Ladder,
}

/// Partitioning strategy configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StrategyConfig {
    /// Greedy construction: strongest player first, always feed the weakest team.
    #[default]
    Greedy,

    /// Exhaustive two-team split search.
    Exhaustive {
        /// Maximum number of splits to evaluate before falling back to greedy.
        #[serde(default = "default_node_limit")]
        node_limit: u64,
    },
}

fn default_node_limit() -> u64 {
    DEFAULT_NODE_LIMIT
}
