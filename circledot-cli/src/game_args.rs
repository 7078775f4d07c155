//! Game options shared by every subcommand
//!
//! Values are layered: defaults, then `--config FILE`, then explicit flags.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use circledot_core::GameConfig;

#[derive(Args, Clone, Debug, Default)]
pub struct GameArgs {
    /// Board size (overrides config file)
    #[arg(long)]
    pub size: Option<usize>,

    /// Chance each cell starts blocked (overrides config file)
    #[arg(long)]
    pub block_probability: Option<f64>,

    /// Game config JSON file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl GameArgs {
    /// Resolve to a validated config; `seed` is the global `--seed`
    pub fn resolve(&self, seed: Option<u64>) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => GameConfig::default(),
        };

        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(p) = self.block_probability {
            config.block_probability = p;
        }
        if seed.is_some() {
            config.seed = seed;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = GameArgs {
            size: Some(7),
            block_probability: Some(0.2),
            config: None,
        };
        let config = args.resolve(Some(9)).unwrap();
        assert_eq!(config.size, 7);
        assert_eq!(config.seed, Some(9));
        assert!((config.block_probability - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");
        GameConfig::default()
            .with_size(12)
            .with_seed(5)
            .save(&path)
            .unwrap();

        let args = GameArgs {
            size: None,
            block_probability: Some(0.0),
            config: Some(path),
        };
        let config = args.resolve(None).unwrap();
        assert_eq!(config.size, 12);
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.block_probability, 0.0);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let args = GameArgs {
            size: Some(1),
            ..GameArgs::default()
        };
        assert!(args.resolve(None).is_err());

        let missing = GameArgs {
            config: Some(PathBuf::from("/nonexistent/game.json")),
            ..GameArgs::default()
        };
        let err = missing.resolve(None).unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }
}
