//! Game configuration, loadable from JSON

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default board size
pub const DEFAULT_SIZE: usize = 9;

/// Smallest board with an interior to start the token on
pub const MIN_SIZE: usize = 4;

/// Largest board the front-ends accept
pub const MAX_SIZE: usize = 25;

/// Default chance that a cell starts blocked
pub const DEFAULT_BLOCK_PROBABILITY: f64 = 0.1;

/// Game configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board is `size x size`
    pub size: usize,
    /// Chance that each cell starts blocked after a reset
    pub block_probability: f64,
    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            block_probability: DEFAULT_BLOCK_PROBABILITY,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.size) {
            return Err(ConfigError::Validation(format!(
                "size must be in {}..={}, got {}",
                MIN_SIZE, MAX_SIZE, self.size
            )));
        }
        if !(0.0..1.0).contains(&self.block_probability) {
            return Err(ConfigError::Validation(format!(
                "block_probability must be in [0, 1), got {}",
                self.block_probability
            )));
        }
        Ok(())
    }

    /// Set board size
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set initial block probability
    pub fn with_block_probability(mut self, p: f64) -> Self {
        self.block_probability = p;
        self
    }
}
