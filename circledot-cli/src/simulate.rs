//! Simulate command - play many automatic games
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: simulate_games(), report_results()
//! - Level 3: simulate_game()
//! - Level 4: choose_block()

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;

use circledot_core::{next_move, Advance, CellState, Coord, Game, GameConfig, TurnResult};

use crate::game_args::GameArgs;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct SimulateArgs {
    /// Number of games to play
    #[arg(long, default_value = "1000")]
    pub games: usize,

    #[command(flatten)]
    pub game: GameArgs,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of a single game
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameRecord {
    pub won: bool,
    pub steps: u32,
}

/// Aggregated simulation results
#[derive(Clone, Debug, Serialize)]
pub struct SimulationSummary {
    pub games: usize,
    pub won: usize,
    pub lost: usize,
    pub win_rate: f64,
    pub avg_steps: f64,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run simulate command
///
/// 1. Resolve config
/// 2. Play all games in parallel
/// 3. Report results
pub fn run(args: SimulateArgs, seed: Option<u64>) -> Result<()> {
    let config = args.game.resolve(seed)?;

    let base_seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!(
        "Simulating {} games on {}x{} (seed={})",
        args.games,
        config.size,
        config.size,
        base_seed
    );

    let progress = ProgressBar::new(args.games as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} games ({eta})")?,
    );

    let records = simulate_games(&config, args.games, base_seed, Some(&progress))?;
    progress.finish_and_clear();

    let summary = summarize(&records);
    report_results(&summary, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Play `games` games; game `i` is seeded with `base_seed + i`
pub fn simulate_games(
    config: &GameConfig,
    games: usize,
    base_seed: u64,
    progress: Option<&ProgressBar>,
) -> Result<Vec<GameRecord>> {
    (0..games)
        .into_par_iter()
        .map(|i| {
            let record = simulate_game(config, base_seed.wrapping_add(i as u64));
            if let Some(p) = progress {
                p.inc(1);
            }
            record
        })
        .collect()
}

pub fn summarize(records: &[GameRecord]) -> SimulationSummary {
    let games = records.len();
    let won = records.iter().filter(|r| r.won).count();
    let total_steps: u64 = records.iter().map(|r| r.steps as u64).sum();

    SimulationSummary {
        games,
        won,
        lost: games - won,
        win_rate: if games > 0 { won as f64 / games as f64 } else { 0.0 },
        avg_steps: if games > 0 { total_steps as f64 / games as f64 } else { 0.0 },
    }
}

fn report_results(summary: &SimulationSummary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }

    println!("Games:     {}", summary.games);
    println!("Won:       {} ({:.1}%)", summary.won, summary.win_rate * 100.0);
    println!("Lost:      {}", summary.lost);
    println!("Avg steps: {:.2}", summary.avg_steps);
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Play one game with the automatic blocker
pub fn simulate_game(config: &GameConfig, seed: u64) -> Result<GameRecord> {
    let mut game = Game::new(config.clone().with_seed(seed))?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    loop {
        let cell = choose_block(&game, &mut rng);
        match game.apply_player_block(cell)? {
            TurnResult::Continue(_) => {}
            TurnResult::Won(steps) => return Ok(GameRecord { won: true, steps }),
            TurnResult::Lost(steps) => return Ok(GameRecord { won: false, steps }),
        }
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Block the token's next cell, or a random open cell if it has none
fn choose_block(game: &Game, rng: &mut ChaCha8Rng) -> Coord {
    let board = game.board();
    if let Advance::Step(next) = next_move(board) {
        return next;
    }

    let n = board.size() as i32;
    let mut open = Vec::new();
    let mut fallback = Vec::new();
    for row in 0..n {
        for col in 0..n {
            let c = Coord::new(row, col);
            match board.cell_state(c) {
                Some(CellState::Available) => open.push(c),
                Some(CellState::Blocked) => fallback.push(c),
                _ => {}
            }
        }
    }

    let pool = if open.is_empty() { &fallback } else { &open };
    // A board of size >= 2 always has a cell besides the token
    pool.choose(rng).copied().unwrap_or(Coord::new(0, 0))
}

// ============================================================================
// TESTS
// ============================================================================
