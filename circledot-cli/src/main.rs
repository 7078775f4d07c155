//! Circle the Dot CLI - Command-line interface
//!
//! Commands:
//! - play: Play interactively in the terminal
//! - simulate: Play many automatic games and report statistics
//! - serve: Start the HTTP API server

mod game_args;
mod play;
mod render;
mod server;
mod simulate;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "circledot")]
#[command(about = "Circle the Dot: trap the token before it reaches the edge")]
struct Cli {
    /// Random seed for reproducible boards
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal
    Play(play::PlayArgs),
    /// Play automatic games and report win rate
    Simulate(simulate::SimulateArgs),
    /// Start the HTTP API server
    Serve(server::ServerArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play::run(args, cli.seed),
        Commands::Simulate(args) => simulate::run(args, cli.seed),
        Commands::Serve(args) => server::run(args, cli.seed),
    }
}
