//! Minimax tic-tac-toe - console front-end
//!
//! Interactive play against the computer plus board analysis commands.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use minimax_tictactoe::{
    Board, GameConfig, HumanPlayer, Mark, MinimaxPlayer, Orchestrator, Position,
    best_scored_move, check_winner, is_full, score_moves, select_best_move,
};
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, name } => run_play(config, name),
        Command::Suggest { board } => {
            init_tracing(GameConfig::default().log_filter());
            run_suggest(board)
        }
        Command::Analyze { board, json } => {
            init_tracing(GameConfig::default().log_filter());
            run_analyze(board, json)
        }
    }
}

/// Logs go to stderr so stdout carries only the game.
fn init_tracing(fallback: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Run an interactive game on stdin/stdout
fn run_play(config: Option<PathBuf>, name: Option<String>) -> Result<()> {
    let mut config = match config {
        Some(path) => GameConfig::from_file(&path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(name) = name {
        config = config.with_human_name(name);
    }

    init_tracing(config.log_filter());
    info!(human = %config.human_name(), "Starting interactive game");

    let human = HumanPlayer::new(config.human_name().clone(), io::stdin().lock(), io::stdout());
    let computer = MinimaxPlayer::new(config.computer_name().clone());

    let mut orchestrator = Orchestrator::new(Box::new(human), Box::new(computer), io::stdout())
        .with_hints(*config.show_hints());
    orchestrator.run()?;

    Ok(())
}

/// Refuses boards that are already decided.
fn ensure_playable(board: &Board) -> Result<()> {
    if let Some(winner) = check_winner(board) {
        anyhow::bail!("Game is already over: {} has won", winner);
    }
    if is_full(board) {
        anyhow::bail!("Game is already over: the board is full");
    }
    Ok(())
}

/// Print the computer's best move for a board
#[instrument(skip(board))]
fn run_suggest(mut board: Board) -> Result<()> {
    ensure_playable(&board)?;
    let pos = select_best_move(&mut board, Mark::O)?;
    println!("Best move for {}: {} {}", Mark::O, pos, pos.label());
    Ok(())
}

/// One scored candidate in `analyze` output.
#[derive(Debug, Serialize)]
struct MoveAnalysis {
    row: usize,
    col: usize,
    label: &'static str,
    score: i8,
}

/// Full `analyze` report.
#[derive(Debug, Serialize)]
struct Analysis {
    player: Mark,
    best: Option<MoveAnalysis>,
    moves: Vec<MoveAnalysis>,
}

impl MoveAnalysis {
    fn new(pos: Position, score: i8) -> Self {
        Self {
            row: pos.row(),
            col: pos.col(),
            label: pos.label(),
            score,
        }
    }
}

/// Print the minimax score of every legal move
#[instrument(skip(board))]
fn run_analyze(mut board: Board, json: bool) -> Result<()> {
    ensure_playable(&board)?;
    let player = Mark::O;
    let scored = score_moves(&mut board, player);
    let best = best_scored_move(&scored);

    if json {
        let report = Analysis {
            player,
            best: best.map(|(pos, score)| MoveAnalysis::new(pos, score.value())),
            moves: scored
                .iter()
                .map(|(pos, score)| MoveAnalysis::new(*pos, score.value()))
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", board);
    println!();
    for (pos, score) in &scored {
        let marker = if best.map(|(b, _)| b) == Some(*pos) {
            " <- best"
        } else {
            ""
        };
        println!("{:>2} {} {:<13}{}", score.value(), pos, pos.label(), marker);
    }
    Ok(())
}
