//! Player trait and implementations.

mod human;
mod minimax;

pub use human::HumanPlayer;
pub use minimax::MinimaxPlayer;

use crate::games::tictactoe::{Board, Position};
use anyhow::Result;

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player for the given board.
    ///
    /// The returned position is only a candidate: the orchestrator validates
    /// it and asks again if the square is taken.
    fn get_move(&mut self, board: &Board) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Line printed before this player's turn, if any.
    ///
    /// Humans see their own prompts instead, so the default is `None`.
    fn turn_announcement(&self) -> Option<String> {
        None
    }
}
