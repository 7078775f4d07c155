//! Example to run the Circle the Dot server standalone
//!
//! Run with: cargo run -p circledot-server --example run_server

use circledot_core::GameConfig;
use circledot_server::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig {
        cors: true,
        game: GameConfig::default().with_seed(1),
        ..ServerConfig::default()
    };

    println!("Board state at http://localhost:{}/api/game", config.port);
    run_server(config).await
}
