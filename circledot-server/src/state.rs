//! Server state management
//!
//! One shared game, serialized behind a lock.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use circledot_core::{Game, GameConfig, GameError};

/// Server-wide shared state
pub struct ServerState {
    game: RwLock<Game>,
}

impl ServerState {
    pub fn new(game: Game) -> Self {
        Self {
            game: RwLock::new(game),
        }
    }

    /// Start the shared game from configuration
    pub fn from_config(config: GameConfig) -> Result<Self, GameError> {
        Ok(Self::new(Game::new(config)?))
    }

    /// Read access to the game (lock poisoning is ignored)
    pub fn game(&self) -> RwLockReadGuard<'_, Game> {
        self.game.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write access to the game
    pub fn game_mut(&self) -> RwLockWriteGuard<'_, Game> {
        self.game.write().unwrap_or_else(PoisonError::into_inner)
    }
}
