//! Circle the Dot Server - HTTP API for browser front-ends
//!
//! One shared game behind a JSON API:
//! - `GET /api/status`, `GET /api/game`
//! - `POST /api/game/reset`, `POST /api/game/block`
//!
//! A front-end build can be served from `static_dir`, or hosted elsewhere
//! with `cors` enabled.

mod routes;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use circledot_core::GameConfig;

pub use routes::game::{BlockRequest, BlockResponse, GameSnapshot, ResetRequest};
pub use state::ServerState;

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    /// Front-end files served for any non-API path
    pub static_dir: Option<PathBuf>,
    /// Allow cross-origin API calls
    pub cors: bool,
    pub game: GameConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8002,
            static_dir: None,
            cors: false,
            game: GameConfig::default(),
        }
    }
}

/// Create the router with all routes
pub fn create_router(config: &ServerConfig, state: Arc<ServerState>) -> Router {
    let mut router = Router::new()
        .route("/api/status", get(routes::status::status_handler))
        .route("/api/game", get(routes::game::get_game))
        .route("/api/game/reset", post(routes::game::reset_game))
        .route("/api/game/block", post(routes::game::block_cell))
        .with_state(state);

    if let Some(dir) = &config.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }
    if config.cors {
        router = router.layer(CorsLayer::permissive());
    }

    router
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(ServerState::from_config(config.game.clone())?);
    let router = create_router(&config, state);

    tracing::info!(
        size = config.game.size,
        seed = ?config.game.seed,
        cors = config.cors,
        "Circle the Dot server listening on http://{}",
        addr
    );
    if let Some(dir) = &config.static_dir {
        tracing::info!("Front-end served from {}", dir.display());
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
