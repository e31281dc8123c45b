//! Error types for tic-tac-toe moves and move search.

use super::{Player, Position};
use derive_more::Display;

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Error returned when move selection is asked for an impossible move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SearchError {
    /// The board has no empty square left for `_0` to play.
    #[display("No legal moves available for {}", _0)]
    NoLegalMoves(Player),
}

impl std::error::Error for SearchError {}
