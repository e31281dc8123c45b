//! Turn-by-turn game loop between two players.

use crate::games::tictactoe::{Game, GameStatus, Mark, MoveError};
use crate::players::Player;
use anyhow::Result;
use std::io::Write;
use tracing::{debug, info, instrument, warn};

/// Runs a game between two players and renders it to `output`.
pub struct Orchestrator<W> {
    game: Game,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    output: W,
    show_hints: bool,
}

impl<W: Write> Orchestrator<W> {
    /// Creates a new orchestrator with a fresh game.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>, output: W) -> Self {
        Self {
            game: Game::new(),
            player_x,
            player_o,
            output,
            show_hints: false,
        }
    }

    /// Renders empty squares with their 1-9 number.
    pub fn with_hints(mut self, show_hints: bool) -> Self {
        self.show_hints = show_hints;
        self
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Plays until the game is won or drawn and returns the final status.
    ///
    /// # Errors
    ///
    /// Fails when a player cannot produce a move (closed input, full board)
    /// or when writing to the output fails.
    #[instrument(skip(self), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run(&mut self) -> Result<GameStatus> {
        info!("Starting game");
        self.print_board()?;

        while !self.game.is_over() {
            self.play_turn()?;
            self.print_board()?;
        }

        let status = self.game.status();
        match self.game.winner() {
            Some(winner) => writeln!(self.output, "Player {} wins!", winner)?,
            None => writeln!(self.output, "Draw!")?,
        }
        info!(?status, moves = self.game.history().len(), "Game over");
        Ok(status)
    }

    /// Asks the player to move until a legal move has been applied.
    fn play_turn(&mut self) -> Result<()> {
        let mark = self.game.to_move();
        let player = match mark {
            Mark::X => &mut self.player_x,
            Mark::O => &mut self.player_o,
        };
        if let Some(announcement) = player.turn_announcement() {
            writeln!(self.output, "{}", announcement)?;
        }

        loop {
            let pos = player.get_move(self.game.board())?;
            match self.game.make_move(pos) {
                Ok(status) => {
                    debug!(player = %player.name(), position = %pos, ?status, "Move made");
                    return Ok(());
                }
                Err(MoveError::SquareOccupied(_)) => {
                    warn!(player = %player.name(), position = %pos, "Square occupied");
                    writeln!(self.output, "Invalid move. Try again.")?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn print_board(&mut self) -> Result<()> {
        let board = self.game.board();
        let rendered = if self.show_hints {
            board.render_with_hints()
        } else {
            board.to_string()
        };
        writeln!(self.output, "{}", rendered)?;
        Ok(())
    }
}
