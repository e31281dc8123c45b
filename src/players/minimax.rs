//! Computer player backed by the exhaustive minimax search.

use super::Player;
use crate::games::tictactoe::{Board, Mark, Position, select_best_move};
use anyhow::Result;
use std::time::Instant;
use tracing::{debug, instrument};

/// Computer player that always picks the best move for O.
///
/// The search scores positions from O's side, so this player only plays O
/// and belongs in the orchestrator's second seat.
#[derive(Debug, Clone)]
pub struct MinimaxPlayer {
    name: String,
}

impl MinimaxPlayer {
    /// Creates a new minimax player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for MinimaxPlayer {
    #[instrument(skip(self, board), fields(ai = %self.name))]
    fn get_move(&mut self, board: &Board) -> Result<Position> {
        // The search mutates its board; keep the live one untouched.
        let mut working = board.clone();
        let started = Instant::now();
        let pos = select_best_move(&mut working, Mark::O)?;
        debug!(
            position = %pos,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "AI chose position"
        );
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn turn_announcement(&self) -> Option<String> {
        Some(format!("{}'s turn", self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Square, apply_move, check_winner};

    #[test]
    fn test_takes_winning_square() {
        let board: Board = "OO_/XX_/___".parse().unwrap();
        let mut ai = MinimaxPlayer::new("Computer");
        assert_eq!(ai.get_move(&board).unwrap(), Position::TopRight);
    }

    #[test]
    fn test_blocks_x_diagonal_as_o() {
        // X threatens the main diagonal; O has no win of its own
        let board: Board = "XO_/_X_/O__".parse().unwrap();
        let mut ai = MinimaxPlayer::new("Computer");
        let pos = ai.get_move(&board).unwrap();
        assert_eq!(pos, Position::BottomRight);

        let mut after = board.clone();
        apply_move(&mut after, pos, Mark::O).unwrap();
        assert_eq!(after.get(Position::BottomRight), Square::Occupied(Mark::O));
        assert_eq!(check_winner(&after), None);
    }

    #[test]
    fn test_announces_its_turn() {
        let ai = MinimaxPlayer::new("Computer");
        assert_eq!(ai.turn_announcement().as_deref(), Some("Computer's turn"));
    }

    #[test]
    fn test_full_board_is_an_error() {
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        let mut ai = MinimaxPlayer::new("Computer");
        assert!(ai.get_move(&board).is_err());
    }
}
