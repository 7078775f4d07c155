//! Circle the Dot Core - Game state and path engine
//!
//! This crate provides the core game logic for Circle the Dot:
//! - Grid geometry (row-parity offset hex adjacency)
//! - Board state (cells, token, step counter)
//! - Path engine (BFS to the nearest border)
//! - Turn resolution and win/loss verdicts

pub mod grid;
pub mod board;
pub mod path;
pub mod game;
pub mod config;
pub mod error;

// Re-exports for convenient access
pub use grid::{Coord, NEIGHBOR_COUNT};
pub use board::{Board, CellState, TokenPosition};
pub use path::{next_move, shortest_path, distance_to_border, is_trapped, Advance};
pub use game::{Game, GameStatus, TurnResult};
pub use config::GameConfig;
pub use error::{ConfigError, GameError};
