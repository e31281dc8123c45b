//! Tic-tac-toe against an exhaustive minimax opponent.
//!
//! The computer picks its moves by searching the whole game tree: every
//! legal continuation is played out to a win, loss or draw, and the move
//! with the best guaranteed outcome is chosen.
//!
//! # Architecture
//!
//! - **Games**: board model, rules, game state machine and minimax search
//!   (`games::tictactoe`)
//! - **Players**: the [`Player`] trait with a console [`HumanPlayer`] and a
//!   search-backed [`MinimaxPlayer`]
//! - **Orchestrator**: the turn loop that renders the board and alternates
//!   players
//! - **Config**: TOML settings for the console game
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{Board, Mark, Position, select_best_move};
//!
//! let mut board: Board = "OO_/XX_/___".parse().unwrap();
//! let pos = select_best_move(&mut board, Mark::O).unwrap();
//! assert_eq!(pos, Position::TopRight);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod orchestrator;
mod players;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, Game, GameStatus, Mark, MoveError, Position, Score, SearchError,
    Square, apply_move, best_scored_move, check_winner, evaluate, is_draw, is_full, legal_moves,
    score_moves, select_best_move, undo_move,
};

// Crate-level exports - Players and orchestration
pub use orchestrator::Orchestrator;
pub use players::{HumanPlayer, MinimaxPlayer, Player};
