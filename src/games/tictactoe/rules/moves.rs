//! Move enumeration, application and undo.

use super::super::{Board, MoveError, Player, Position, Square};
use tracing::instrument;

/// Returns every empty position in row-major order.
///
/// The order is part of the contract: move selection keeps the first
/// candidate among equally scored moves.
#[instrument(level = "trace", skip(board))]
pub fn legal_moves(board: &Board) -> Vec<Position> {
    Position::ALL
        .iter()
        .copied()
        .filter(|&pos| board.is_empty(pos))
        .collect()
}

/// Places `player`'s mark at `pos` if the square is empty.
///
/// # Errors
///
/// Returns [`MoveError::SquareOccupied`] and leaves the board untouched when
/// the square already holds a mark.
#[instrument(level = "trace", skip(board))]
pub fn apply_move(board: &mut Board, pos: Position, player: Player) -> Result<(), MoveError> {
    if !board.is_empty(pos) {
        return Err(MoveError::SquareOccupied(pos));
    }
    board.set(pos, Square::Occupied(player));
    Ok(())
}

/// Clears the square at `pos`.
///
/// The caller must have filled `pos` with a matching [`apply_move`].
#[instrument(level = "trace", skip(board))]
pub fn undo_move(board: &mut Board, pos: Position) {
    board.set(pos, Square::Empty);
}
