//! `serve`: host one shared game over HTTP

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use circledot_server::{run_server, ServerConfig};

use crate::game_args::GameArgs;

#[derive(Args)]
pub struct ServerArgs {
    /// Port number to listen on
    #[arg(long, default_value = "8002")]
    pub port: u16,

    /// Serve a front-end build from this directory
    #[arg(long, value_name = "DIR")]
    pub static_dir: Option<PathBuf>,

    /// Allow API calls from other origins
    #[arg(long)]
    pub cors: bool,

    #[command(flatten)]
    pub game: GameArgs,
}

pub fn run(args: ServerArgs, seed: Option<u64>) -> Result<()> {
    let config = server_config(args, seed)?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run_server(config))
}

fn server_config(args: ServerArgs, seed: Option<u64>) -> Result<ServerConfig> {
    if let Some(dir) = &args.static_dir {
        if !dir.is_dir() {
            bail!("--static-dir {} is not a directory", dir.display());
        }
    }

    Ok(ServerConfig {
        port: args.port,
        static_dir: args.static_dir,
        cors: args.cors,
        game: args.game.resolve(seed)?,
    })
}
