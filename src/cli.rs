//! Command-line interface for minimax_tictactoe.

use clap::{Parser, Subcommand};
use minimax_tictactoe::Board;
use std::path::PathBuf;

/// Tic-tac-toe against an exhaustive minimax opponent
#[derive(Parser, Debug)]
#[command(name = "minimax_tictactoe")]
#[command(about = "Play tic-tac-toe against a perfect minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game: you are X, the computer is O
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Your display name (overrides the config file)
        #[arg(long)]
        name: Option<String>,
    },

    /// Print the computer's (O's) best move for a board
    Suggest {
        /// Nine squares in row-major order, e.g. "OO_/XX_/___"
        board: Board,
    },

    /// Print the minimax score of every legal move for O
    Analyze {
        /// Nine squares in row-major order, e.g. "X__/_O_/___"
        board: Board,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
