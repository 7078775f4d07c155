//! Game API endpoints
//!
//! Snapshot the board, reset it, and play one block per request.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use circledot_core::{CellState, Coord, Game, GameError, GameStatus, TurnResult};

use crate::state::ServerState;

/// Everything a front-end needs to draw the board
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub size: usize,
    /// Rows top to bottom
    pub cells: Vec<Vec<CellState>>,
    /// `None` once the token has left the board
    pub token: Option<Coord>,
    pub steps: u32,
    pub status: GameStatus,
}

impl GameSnapshot {
    pub fn of(game: &Game) -> Self {
        let board = game.board();
        Self {
            size: board.size(),
            cells: board.rows().map(|row| row.to_vec()).collect(),
            token: board.token().coord(),
            steps: board.step_count(),
            status: game.status(),
        }
    }
}

/// Error body returned for rejected requests
pub struct ApiError(StatusCode, String);

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        let status = match err {
            GameError::GameOver(_) => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
        };
        ApiError(status, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.0, Json(json!({ "error": self.1 }))).into_response()
    }
}

/// Get current game state
pub async fn get_game(State(state): State<Arc<ServerState>>) -> Json<GameSnapshot> {
    let game = state.game();
    Json(GameSnapshot::of(&game))
}

/// Reset request, all fields optional
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ResetRequest {
    pub size: Option<usize>,
    pub seed: Option<u64>,
}

impl ResetRequest {
    /// Parse a request body; an empty body means "same size, fresh board"
    pub(crate) fn from_body(body: &[u8]) -> Result<Self, ApiError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
            .map_err(|e| ApiError(StatusCode::BAD_REQUEST, format!("invalid reset body: {}", e)))
    }
}

/// Start a new game, optionally with a new size or seed
pub async fn reset_game(
    State(state): State<Arc<ServerState>>,
    body: Bytes,
) -> Result<Json<GameSnapshot>, ApiError> {
    let req = ResetRequest::from_body(&body)?;
    let mut game = state.game_mut();
    let size = req.size.unwrap_or(game.config().size);

    match req.seed {
        Some(seed) => {
            let config = game.config().clone().with_size(size).with_seed(seed);
            *game = Game::new(config)?;
        }
        None => game.reset_with_size(size)?,
    }

    Ok(Json(GameSnapshot::of(&game)))
}

/// Block request
#[derive(Debug, Deserialize, Serialize)]
pub struct BlockRequest {
    pub row: i32,
    pub col: i32,
}

/// Turn outcome plus the board after it
#[derive(Debug, Serialize, Deserialize)]
pub struct BlockResponse {
    pub result: TurnResult,
    pub game: GameSnapshot,
}

/// Block a cell and let the token move
pub async fn block_cell(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<BlockRequest>,
) -> Result<Json<BlockResponse>, ApiError> {
    let mut game = state.game_mut();
    let result = game.apply_player_block(Coord::new(req.row, req.col))?;

    Ok(Json(BlockResponse {
        result,
        game: GameSnapshot::of(&game),
    }))
}
