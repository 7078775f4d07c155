//! Health check plus a one-line summary of the shared game

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use circledot_core::GameStatus;

use crate::state::ServerState;

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub engine: &'static str,
    pub board_size: usize,
    pub game: GameStatus,
}

pub async fn status_handler(State(state): State<Arc<ServerState>>) -> Json<StatusResponse> {
    let game = state.game();
    Json(StatusResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        engine: "circledot",
        board_size: game.board().size(),
        game: game.status(),
    })
}
