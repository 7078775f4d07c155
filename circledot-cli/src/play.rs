//! Play command - interactive terminal game
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_session()
//! - Level 3: play_turn(), ask_play_again()
//! - Level 4: command parsing

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;

use circledot_core::{Coord, Game, TurnResult};

use crate::game_args::GameArgs;
use crate::render::render_board;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    #[command(flatten)]
    pub game: GameArgs,
}

/// Tally of one terminal session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub won: usize,
    pub lost: usize,
}

/// A parsed line of player input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Block(Coord),
    Reset,
    Quit,
    Help,
}

const HELP: &str = "Enter `row col` to block a cell, `reset` for a new board, `quit` to leave.";

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
///
/// 1. Resolve configuration (file, then flags)
/// 2. Start a game
/// 3. Hand stdin/stdout to the session loop
pub fn run(args: PlayArgs, seed: Option<u64>) -> Result<()> {
    let config = args.game.resolve(seed)?;
    let mut game = Game::new(config).context("Failed to start game")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = play_session(&mut game, stdin.lock(), stdout.lock())?;

    tracing::info!(won = summary.won, lost = summary.lost, "session finished");
    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Read commands until the player quits or input ends
pub fn play_session<R: BufRead, W: Write>(
    game: &mut Game,
    mut input: R,
    mut out: W,
) -> Result<SessionSummary> {
    let mut summary = SessionSummary::default();
    writeln!(out, "{}", HELP)?;

    loop {
        write!(out, "\n{}", render_board(game.board()))?;
        write!(out, "steps: {}> ", game.board().step_count())?;
        out.flush()?;

        let Some(line) = read_line(&mut input)? else {
            break;
        };

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(out, "{}", HELP)?,
            Ok(Command::Reset) => game.reset()?,
            Ok(Command::Block(coord)) => {
                let Some(result) = play_turn(game, coord, &mut out)? else {
                    continue;
                };
                match result {
                    TurnResult::Continue(_) => {}
                    TurnResult::Won(_) => summary.won += 1,
                    TurnResult::Lost(_) => summary.lost += 1,
                }
                if result.is_terminal() {
                    if ask_play_again(&mut input, &mut out)? {
                        game.reset()?;
                    } else {
                        break;
                    }
                }
            }
            Err(msg) => writeln!(out, "{}", msg)?,
        }
    }

    writeln!(out, "Bye!")?;
    Ok(summary)
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Apply one block; rejected moves are reported and yield `None`
fn play_turn<W: Write>(game: &mut Game, coord: Coord, out: &mut W) -> Result<Option<TurnResult>> {
    let result = match game.apply_player_block(coord) {
        Ok(result) => result,
        Err(e) => {
            writeln!(out, "Invalid move: {}", e)?;
            return Ok(None);
        }
    };

    match result {
        TurnResult::Continue(_) => {}
        TurnResult::Won(steps) => {
            write!(out, "\n{}", render_board(game.board()))?;
            writeln!(out, "Congratulations! You won in {} steps!", steps)?;
        }
        TurnResult::Lost(steps) => {
            write!(out, "\n{}", render_board(game.board()))?;
            writeln!(out, "You lost after {} steps!", steps)?;
        }
    }

    Ok(Some(result))
}

fn ask_play_again<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<bool> {
    write!(out, "Play again? [y/N] ")?;
    out.flush()?;

    let answer = read_line(input)?.unwrap_or_default();
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Next line of input, `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn parse_command(line: &str) -> Result<Command, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        ["quit"] | ["q"] | ["exit"] => Ok(Command::Quit),
        ["reset"] | ["r"] => Ok(Command::Reset),
        ["help"] | ["h"] | ["?"] => Ok(Command::Help),
        [row, col] => {
            let row = row.parse::<i32>().map_err(|_| format!("Bad row: {}", row))?;
            let col = col.parse::<i32>().map_err(|_| format!("Bad column: {}", col))?;
            Ok(Command::Block(Coord::new(row, col)))
        }
        _ => Err(format!("Unrecognized input. {}", HELP)),
    }
}

// ============================================================================
// TESTS
// ============================================================================
