//! Tests for the console game loop.

use anyhow::Result;
use minimax_tictactoe::{
    Board, GameConfig, GameStatus, HumanPlayer, Mark, MinimaxPlayer, Orchestrator, Player,
    Position,
};
use std::collections::VecDeque;
use std::io::{Cursor, Write};

/// Plays a fixed list of positions, occupied or not.
struct ScriptedPlayer {
    name: String,
    moves: VecDeque<Position>,
}

impl ScriptedPlayer {
    fn new(name: &str, moves: &[Position]) -> Self {
        Self {
            name: name.to_string(),
            moves: moves.iter().copied().collect(),
        }
    }
}

impl Player for ScriptedPlayer {
    fn get_move(&mut self, _board: &Board) -> Result<Position> {
        self.moves
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("Script exhausted"))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[test]
fn test_scripted_game_x_wins() {
    let x = ScriptedPlayer::new(
        "Ada",
        &[Position::TopLeft, Position::TopCenter, Position::TopRight],
    );
    // O first tries a taken square and is asked again
    let o = ScriptedPlayer::new(
        "Bob",
        &[Position::TopLeft, Position::MiddleLeft, Position::Center],
    );

    let mut output = Vec::new();
    let mut orchestrator = Orchestrator::new(Box::new(x), Box::new(o), &mut output);
    let status = orchestrator.run().unwrap();

    assert_eq!(status, GameStatus::Won(Mark::X));
    assert_eq!(orchestrator.game().history().len(), 5);
    drop(orchestrator);

    let text = String::from_utf8(output).unwrap();
    assert_eq!(text.matches("Invalid move. Try again.").count(), 1);
    assert!(!text.contains("'s turn"));
    assert!(text.contains("X | X | X\n---------\nO | O |  \n"));
    assert!(text.trim_end().ends_with("Player X wins!"));
}

#[test]
fn test_scripted_game_draw() {
    // X O X / X O O / O X X
    let x = ScriptedPlayer::new(
        "Ada",
        &[
            Position::TopLeft,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ],
    );
    let o = ScriptedPlayer::new(
        "Bob",
        &[
            Position::TopCenter,
            Position::Center,
            Position::MiddleRight,
            Position::BottomLeft,
        ],
    );

    let mut output = Vec::new();
    let status = Orchestrator::new(Box::new(x), Box::new(o), &mut output)
        .run()
        .unwrap();

    assert_eq!(status, GameStatus::Draw);
    let text = String::from_utf8(output).unwrap();
    assert!(text.trim_end().ends_with("Draw!"));
}

#[test]
fn test_human_cannot_beat_computer() {
    // The human tries every square in order; taken squares are re-prompted
    let mut script = String::new();
    for row in 1..=3 {
        for col in 1..=3 {
            script.push_str(&format!("{row}\n{col}\n"));
        }
    }
    let human = HumanPlayer::new("Ada", Cursor::new(script), std::io::sink());
    let computer = MinimaxPlayer::new("Computer");

    let mut output = Vec::new();
    let status = Orchestrator::new(Box::new(human), Box::new(computer), &mut output)
        .with_hints(true)
        .run()
        .unwrap();

    assert_ne!(status, GameStatus::Won(Mark::X));
    assert_ne!(status, GameStatus::InProgress);
    let text = String::from_utf8(output).unwrap();
    assert!(text.starts_with("1 | 2 | 3\n---------\n4 | 5 | 6\n"));
}

#[test]
fn test_only_computer_turns_are_announced() {
    // X takes the centre, O answers in the top-left corner, X takes the
    // opposite corner, then input ends
    let human = HumanPlayer::new("Ada", Cursor::new("2\n2\n3\n3\n"), std::io::sink());
    let computer = MinimaxPlayer::new("Computer");

    let mut output = Vec::new();
    let mut orchestrator = Orchestrator::new(Box::new(human), Box::new(computer), &mut output);
    assert!(orchestrator.run().is_err());
    assert_eq!(orchestrator.game().history().len(), 4);
    drop(orchestrator);

    let text = String::from_utf8(output).unwrap();
    assert_eq!(text.matches("Computer's turn\n").count(), 2);
    assert!(!text.contains("Ada's turn"));
}

#[test]
fn test_closed_input_stops_the_game() {
    let human = HumanPlayer::new("Ada", Cursor::new("2\n2\n"), std::io::sink());
    let computer = MinimaxPlayer::new("Computer");

    let mut orchestrator = Orchestrator::new(Box::new(human), Box::new(computer), std::io::sink());
    assert!(orchestrator.run().is_err());
    assert_eq!(orchestrator.game().history().len(), 2);
}

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "human_name = \"Ada\"").unwrap();
    writeln!(file, "computer_name = \"HAL\"").unwrap();
    writeln!(file, "show_hints = true").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.human_name(), "Ada");
    assert_eq!(config.computer_name(), "HAL");
    assert!(*config.show_hints());
    assert_eq!(config.log_filter(), "warn");
}

#[test]
fn test_config_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}
