//! Human player reading coordinates from a line-based input.

use super::Player;
use crate::games::tictactoe::{Board, Position};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Human player prompted for a 1-based row and column.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player reading from `input` and prompting on `output`.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Prompts until a number between 1 and 3 is entered.
    fn read_coordinate(&mut self, prompt: &str) -> Result<usize> {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                anyhow::bail!("Input closed");
            }

            match line.trim().parse::<usize>() {
                Ok(n) if (1..=3).contains(&n) => return Ok(n - 1),
                _ => {
                    debug!(input = %line.trim(), "Rejected coordinate");
                    writeln!(self.output, "Please enter 1, 2 or 3.")?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    #[instrument(skip(self, _board), fields(player = %self.name))]
    fn get_move(&mut self, _board: &Board) -> Result<Position> {
        let row = self.read_coordinate("Enter row: ")?;
        let col = self.read_coordinate("Enter col: ")?;
        Position::from_row_col(row, col)
            .ok_or_else(|| anyhow::anyhow!("Invalid position ({}, {})", row, col))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
