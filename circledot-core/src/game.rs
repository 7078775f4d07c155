//! Game state and turn resolution
//!
//! A turn is one player block followed by one forced token move:
//! block -> search -> move token -> verdict.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, TokenPosition};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::grid::Coord;
use crate::path::{next_move, Advance};

// ============================================================================
// CORE TYPES
// ============================================================================

/// Game status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InPlay,
    /// The token is trapped
    Won,
    /// The token reached the border
    Lost,
}

/// Outcome of one player block
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnResult {
    /// Token moved to this cell, game goes on
    Continue(Coord),
    /// Player won after this many steps
    Won(u32),
    /// Player lost after this many steps
    Lost(u32),
}

impl TurnResult {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TurnResult::Continue(_))
    }
}

// ============================================================================
// GAME STATE
// ============================================================================

/// One game session: board, verdict and the generator used for resets
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    board: Board,
    status: GameStatus,
    rng: ChaCha8Rng,
}

impl Game {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Start a new game from configuration
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let board = Board::new(config.size, config.block_probability, &mut rng)?;

        tracing::info!(size = config.size, seed = ?config.seed, "new game");

        Ok(Self {
            config,
            board,
            status: GameStatus::InPlay,
            rng,
        })
    }

    /// Start a game from a hand-built board
    pub fn from_board(board: Board) -> Self {
        let config = GameConfig::default().with_size(board.size());
        Self {
            config,
            board,
            status: GameStatus::InPlay,
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InPlay
    }

    // ========================================================================
    // RESET
    // ========================================================================

    /// Start over on a fresh board of the same size
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.reset_with_size(self.config.size)
    }

    /// Start over on a fresh board of a new size
    pub fn reset_with_size(&mut self, size: usize) -> Result<(), GameError> {
        let config = self.config.clone().with_size(size);
        config.validate()?;

        self.board
            .reset(size, config.block_probability, &mut self.rng)?;
        self.config = config;
        self.status = GameStatus::InPlay;
        tracing::info!(size, "game reset");
        Ok(())
    }

    // ========================================================================
    // TURN
    // ========================================================================

    /// Block a cell and advance the token one step.
    ///
    /// Rejected calls leave the game untouched.
    pub fn apply_player_block(&mut self, coord: Coord) -> Result<TurnResult, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver(self.status));
        }

        self.board.block(coord)?;
        let steps = self.board.step_count();

        let result = match next_move(&self.board) {
            Advance::Trapped => {
                self.status = GameStatus::Won;
                TurnResult::Won(steps)
            }
            Advance::Exit => {
                self.board.move_token(TokenPosition::Exited)?;
                self.status = GameStatus::Lost;
                TurnResult::Lost(steps)
            }
            Advance::Step(next) => {
                self.board.move_token(TokenPosition::OnBoard(next))?;
                if next.is_border(self.board.size()) {
                    self.status = GameStatus::Lost;
                    TurnResult::Lost(steps)
                } else {
                    TurnResult::Continue(next)
                }
            }
        };

        tracing::debug!(blocked = %coord, ?result, "turn resolved");
        if result.is_terminal() {
            tracing::info!(status = ?self.status, steps, "game over");
        }

        Ok(result)
    }
}

// ============================================================================
// TESTS
// ============================================================================
