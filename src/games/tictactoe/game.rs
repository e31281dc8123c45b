//! Game state machine for tic-tac-toe.

use super::rules::{apply_move, check_winner, is_full};
use super::{Board, GameStatus, MoveError, Player, Position};
use tracing::{debug, instrument};

/// Tic-tac-toe game: the live board, whose turn it is, and the outcome.
///
/// X always moves first and turns alternate strictly. Once the game is won
/// or drawn it accepts no further moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
    history: Vec<Position>,
}

impl Game {
    /// Creates a new game on an empty board with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    ///
    /// After the game ends this is the player who made the last move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// Returns the positions played so far, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Returns the status after the move. The turn passes to the opponent
    /// only while the game is still in progress.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game has already ended.
    /// - [`MoveError::SquareOccupied`] if `pos` is taken; the game is unchanged.
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn make_move(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        apply_move(&mut self.board, pos, self.to_move)?;
        self.history.push(pos);
        self.update_status();

        if !self.is_over() {
            self.to_move = self.to_move.opponent();
        }

        debug!(status = ?self.status, "Move applied");
        Ok(self.status)
    }

    /// Updates game status after a move.
    fn update_status(&mut self) {
        if let Some(winner) = check_winner(&self.board) {
            self.status = GameStatus::Won(winner);
        } else if is_full(&self.board) {
            self.status = GameStatus::Draw;
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
