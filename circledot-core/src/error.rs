//! Error types for the game core

use std::path::PathBuf;

use crate::game::GameStatus;
use crate::grid::Coord;

/// Rejected game operations. State is never mutated when one of these is returned.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("coordinate {coord} is outside the {size}x{size} board")]
    OutOfBounds { coord: Coord, size: usize },

    #[error("cell {0} holds the token and cannot be blocked")]
    TokenCell(Coord),

    #[error("game is over ({0:?}); reset to play again")]
    GameOver(GameStatus),

    #[error("invalid board size {0}")]
    InvalidSize(usize),

    #[error("block probability {0} is not in [0, 1]")]
    InvalidProbability(f64),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write config file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Validation(String),
}
