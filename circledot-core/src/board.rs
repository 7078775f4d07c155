//! Board state: cell grid, token position and step counter
//!
//! The board only stores and mutates state. Deciding where the token goes and
//! whether the game is over belongs to [`crate::path`] and [`crate::game`].

use rand::distributions::{Bernoulli, Distribution};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::grid::{center_candidates, Coord};

/// State of a single on-board cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    Available,
    Blocked,
    Occupied,
}

/// Where the token is
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenPosition {
    OnBoard(Coord),
    /// The token stepped off the board
    Exited,
}

impl TokenPosition {
    pub fn coord(&self) -> Option<Coord> {
        match self {
            TokenPosition::OnBoard(c) => Some(*c),
            TokenPosition::Exited => None,
        }
    }
}

/// Square board of `size * size` cells (clone to snapshot)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major cell states
    cells: Vec<CellState>,
    token: TokenPosition,
    steps: u32,
}

impl Board {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create a freshly seeded board
    pub fn new<R: Rng>(size: usize, block_probability: f64, rng: &mut R) -> Result<Self, GameError> {
        check_size(size)?;
        let mut board = Self::blank(size);
        board.reset(size, block_probability, rng)?;
        Ok(board)
    }

    /// Create a board with no blocked cells and the token at `token`
    pub fn empty(size: usize, token: Coord) -> Result<Self, GameError> {
        check_size(size)?;
        let mut board = Self::blank(size);
        board.move_token(TokenPosition::OnBoard(token))?;
        Ok(board)
    }

    fn blank(size: usize) -> Self {
        Self {
            size,
            cells: vec![CellState::Available; size * size],
            token: TokenPosition::Exited,
            steps: 0,
        }
    }

    // ========================================================================
    // RESET
    // ========================================================================

    /// Clear the board, scatter random blocks, seed the token near the centre
    /// and zero the step counter.
    ///
    /// Each cell is blocked independently with `block_probability`.
    pub fn reset<R: Rng>(
        &mut self,
        size: usize,
        block_probability: f64,
        rng: &mut R,
    ) -> Result<(), GameError> {
        check_size(size)?;
        let blocker = Bernoulli::new(block_probability)
            .map_err(|_| GameError::InvalidProbability(block_probability))?;

        *self = Self::blank(size);
        for cell in self.cells.iter_mut() {
            if blocker.sample(rng) {
                *cell = CellState::Blocked;
            }
        }

        let token = self.seed_token(rng);
        self.move_token(TokenPosition::OnBoard(token))?;
        self.steps = 0;

        tracing::debug!(
            size,
            blocked = self.blocked_count(),
            token = %token,
            "board reset"
        );
        Ok(())
    }

    /// Pick a free central cell for the token.
    ///
    /// If every central candidate is blocked, one of them is cleared and used.
    fn seed_token<R: Rng>(&mut self, rng: &mut R) -> Coord {
        let candidates = center_candidates(self.size);
        let free: Vec<Coord> = candidates
            .iter()
            .copied()
            .filter(|&c| !self.is_blocked(c))
            .collect();

        if let Some(&c) = free.choose(rng) {
            return c;
        }

        // center_candidates is never empty for size >= 1
        let c = candidates[rng.gen_range(0..candidates.len())];
        tracing::debug!(cell = %c, "all centre cells blocked, clearing one for the token");
        let idx = c.index(self.size);
        self.cells[idx] = CellState::Available;
        c
    }

    // ========================================================================
    // MUTATION
    // ========================================================================

    /// Block a cell and count the step.
    ///
    /// Blocking an already blocked cell still counts as a step.
    pub fn block(&mut self, coord: Coord) -> Result<(), GameError> {
        self.check_bounds(coord)?;
        if self.token == TokenPosition::OnBoard(coord) {
            return Err(GameError::TokenCell(coord));
        }

        let idx = coord.index(self.size);
        self.cells[idx] = CellState::Blocked;
        self.steps += 1;
        Ok(())
    }

    /// Move the token, clearing its previous cell
    pub fn move_token(&mut self, to: TokenPosition) -> Result<(), GameError> {
        if let TokenPosition::OnBoard(c) = to {
            self.check_bounds(c)?;
        }

        if let TokenPosition::OnBoard(prev) = self.token {
            let idx = prev.index(self.size);
            self.cells[idx] = CellState::Available;
        }

        if let TokenPosition::OnBoard(c) = to {
            let idx = c.index(self.size);
            self.cells[idx] = CellState::Occupied;
        }
        self.token = to;
        Ok(())
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn step_count(&self) -> u32 {
        self.steps
    }

    pub fn token(&self) -> TokenPosition {
        self.token
    }

    /// State of a cell, `None` if off-board
    pub fn cell_state(&self, coord: Coord) -> Option<CellState> {
        if coord.in_bounds(self.size) {
            Some(self.cells[coord.index(self.size)])
        } else {
            None
        }
    }

    pub fn is_blocked(&self, coord: Coord) -> bool {
        self.cell_state(coord) == Some(CellState::Blocked)
    }

    pub fn blocked_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c == CellState::Blocked)
            .count()
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Row-major blocked flags, a scratch copy callers may scribble on
    pub fn blocked_mask(&self) -> Vec<bool> {
        self.cells
            .iter()
            .map(|&c| c == CellState::Blocked)
            .collect()
    }

    fn check_bounds(&self, coord: Coord) -> Result<(), GameError> {
        if coord.in_bounds(self.size) {
            Ok(())
        } else {
            Err(GameError::OutOfBounds {
                coord,
                size: self.size,
            })
        }
    }
}

fn check_size(size: usize) -> Result<(), GameError> {
    if size == 0 || size > i32::MAX as usize {
        return Err(GameError::InvalidSize(size));
    }
    Ok(())
}
