//! Tic-tac-toe: board model, rules, game state machine and minimax search.

mod error;
mod game;
mod position;
pub mod rules;
pub mod search;
mod types;

pub use error::{MoveError, SearchError};
pub use game::Game;
pub use position::Position;
pub use rules::{apply_move, check_winner, is_draw, is_full, legal_moves, undo_move};
pub use search::{Score, best_scored_move, evaluate, score_moves, select_best_move};
pub use types::{Board, BoardParseError, GameStatus, Player, Square};

/// Alias for clarity where a player trait is also in scope.
pub type Mark = Player;
