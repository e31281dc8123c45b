//! Exhaustive minimax search.
//!
//! The search walks every line of play down to a terminal board. It runs on
//! a single working board: each frame applies a trial move, recurses, and
//! undoes the move before looking at the next one, so the board is back in
//! its original state whenever a call returns.

use super::rules::{apply_move, check_winner, is_full, legal_moves, undo_move};
use super::{Board, Player, Position, SearchError};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Value of a position under perfect play, from O's point of view.
///
/// Ordered `XWins < Draw < OWins`. There are no intermediate values: a win
/// nine plies away is worth the same as an immediate one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[repr(i8)]
pub enum Score {
    /// X wins.
    #[display("-1")]
    XWins = -1,
    /// Neither side can force a win.
    #[display("0")]
    Draw = 0,
    /// O wins.
    #[display("1")]
    OWins = 1,
}

impl Score {
    /// Numeric value: -1, 0 or 1.
    pub fn value(self) -> i8 {
        self as i8
    }

    /// Score of a finished game won by `player`.
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::X => Score::XWins,
            Player::O => Score::OWins,
        }
    }
}

/// Minimax value of `board`.
///
/// `maximizing` selects whose hypothetical move comes next: O (maximizing)
/// when true, X (minimizing) when false. Terminal boards are scored directly
/// without looking at the flag.
pub fn evaluate(board: &mut Board, maximizing: bool) -> Score {
    if let Some(winner) = check_winner(board) {
        return Score::win_for(winner);
    }
    if is_full(board) {
        return Score::Draw;
    }

    let (mover, mut best) = if maximizing {
        (Player::O, Score::XWins)
    } else {
        (Player::X, Score::OWins)
    };

    for pos in legal_moves(board) {
        let score = score_move(board, pos, mover, !maximizing);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Applies `player` at the empty square `pos`, evaluates, and undoes.
fn score_move(board: &mut Board, pos: Position, player: Player, maximizing: bool) -> Score {
    let Ok(()) = apply_move(board, pos, player) else {
        unreachable!("legal_moves yielded occupied square {pos}");
    };
    let score = evaluate(board, maximizing);
    undo_move(board, pos);
    score
}

/// Scores every legal move for `player`, in row-major order.
///
/// Each candidate is followed by X's reply, matching
/// [`select_best_move`].
#[instrument(skip(board), fields(empty = board.empty_count()))]
pub fn score_moves(board: &mut Board, player: Player) -> Vec<(Position, Score)> {
    legal_moves(board)
        .into_iter()
        .map(|pos| (pos, score_move(board, pos, player, false)))
        .collect()
}

/// Picks the winner among scored candidates.
///
/// The first candidate reaching the highest score is kept; later candidates
/// replace it only when they score strictly higher. `None` when `scored` is
/// empty.
pub fn best_scored_move(scored: &[(Position, Score)]) -> Option<(Position, Score)> {
    let mut best: Option<(Position, Score)> = None;

    for &(pos, score) in scored {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((pos, score)),
        }
    }

    best
}

/// Picks the best move for `player` on `board`.
///
/// Every legal move is played out against a minimizing reply, and the
/// winner is chosen by [`best_scored_move`].
///
/// # Errors
///
/// Returns [`SearchError::NoLegalMoves`] when the board is full.
#[instrument(skip(board), fields(empty = board.empty_count()))]
pub fn select_best_move(board: &mut Board, player: Player) -> Result<Position, SearchError> {
    let scored: Vec<(Position, Score)> = legal_moves(board)
        .into_iter()
        .map(|pos| {
            let score = score_move(board, pos, player, false);
            trace!(position = %pos, score = score.value(), "Scored candidate");
            (pos, score)
        })
        .collect();

    let (pos, score) = best_scored_move(&scored).ok_or(SearchError::NoLegalMoves(player))?;
    debug!(position = %pos, score = score.value(), "Selected move");
    Ok(pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_ordering() {
        assert!(Score::XWins < Score::Draw);
        assert!(Score::Draw < Score::OWins);
        assert_eq!(Score::XWins.value(), -1);
        assert_eq!(Score::OWins.value(), 1);
    }

    #[test]
    fn test_score_displays_its_value() {
        assert_eq!(Score::XWins.to_string(), "-1");
        assert_eq!(Score::Draw.to_string(), "0");
        assert_eq!(Score::OWins.to_string(), "1");
    }

    #[test]
    fn test_best_scored_move_keeps_first_of_equals() {
        let scored = [
            (Position::TopLeft, Score::Draw),
            (Position::TopCenter, Score::OWins),
            (Position::Center, Score::OWins),
            (Position::BottomRight, Score::XWins),
        ];
        assert_eq!(
            best_scored_move(&scored),
            Some((Position::TopCenter, Score::OWins))
        );
        assert_eq!(best_scored_move(&[]), None);
    }

    #[test]
    fn test_terminal_scores_ignore_polarity() {
        for maximizing in [true, false] {
            let mut o_wins: Board = "OOO/XX_/X__".parse().unwrap();
            assert_eq!(evaluate(&mut o_wins, maximizing), Score::OWins);

            let mut x_wins: Board = "XOO/XO_/X__".parse().unwrap();
            assert_eq!(evaluate(&mut x_wins, maximizing), Score::XWins);

            let mut draw: Board = "XOX/OXX/OXO".parse().unwrap();
            assert_eq!(evaluate(&mut draw, maximizing), Score::Draw);
        }
    }

    #[test]
    fn test_last_square_follows_polarity() {
        // The last square completes O's right column or X's main diagonal
        let mut board: Board = "XXO/OXO/XO_".parse().unwrap();
        assert_eq!(evaluate(&mut board, true), Score::OWins);
        assert_eq!(evaluate(&mut board, false), Score::XWins);
    }

    #[test]
    fn test_select_on_full_board_fails() {
        let mut board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert_eq!(
            select_best_move(&mut board, Player::O),
            Err(SearchError::NoLegalMoves(Player::O))
        );
    }
}
