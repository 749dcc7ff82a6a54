//! Terminal front end for a hot-seat game.
//!
//! Turns lines of user input into engine commands and renders the table as
//! text. Holds no rules of its own: every decision is the engine's.

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use thiserror::Error;

use crate::game::{GameError, GameState, Outcome};

pub const HELP: &str = "\
Commands:
  play <n> | p <n>   play the n-th tile of your hand
  draw | d           draw a tile from the pile
  end | e            end your turn
  help | h           show this help
  quit | q           leave the game";

/// A parsed line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based position in the active hand
    Play(usize),
    Draw,
    EndTurn,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),
    #[error("Which tile? Use 'play <n>'")]
    MissingPosition,
    #[error("'{0}' is not a tile position")]
    BadPosition(String),
    #[error("No tile at position {position}, your hand has {hand_size}")]
    OutOfRange { position: usize, hand_size: usize },
}

/// Parse one line of input. Positions are 1-based as shown on screen.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Err(CommandError::Empty);
    };

    match word.to_ascii_lowercase().as_str() {
        "play" | "p" => {
            let arg = parts.next().ok_or(CommandError::MissingPosition)?;
            let position: usize = arg
                .parse()
                .map_err(|_| CommandError::BadPosition(arg.to_string()))?;
            if position == 0 {
                return Err(CommandError::BadPosition(arg.to_string()));
            }
            Ok(Command::Play(position - 1))
        }
        "draw" | "d" => Ok(Command::Draw),
        "end" | "e" => Ok(Command::EndTurn),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

/// Text view of the table and the active player's hand
pub fn render(state: &GameState) -> String {
    let mut out = String::new();

    let board: String = state.chain().iter().map(|p| p.to_string()).collect();
    if board.is_empty() {
        out.push_str("Board: (empty)\n");
    } else {
        let _ = writeln!(out, "Board: {board}");
    }
    let _ = writeln!(out, "Remaining Tiles: {}", state.draw_pile_size());
    let _ = writeln!(out, "{}'s Turn", state.active_player());

    out.push_str("Your Tiles:");
    for (i, tile) in state.active_hand().iter().enumerate() {
        let _ = write!(out, " {}:{}", i + 1, tile);
    }
    out.push('\n');
    out
}

pub fn outcome_message(outcome: Outcome) -> String {
    match outcome {
        Outcome::Win(player) => format!("Game Over: {player} wins!"),
        Outcome::Draw => "Game Over: No valid moves left. Game ends in a draw!".to_string(),
    }
}

fn error_message(err: &GameError) -> String {
    match err {
        GameError::InvalidMove { .. } => {
            "Invalid Move: You can only play a tile that matches the board!".to_string()
        }
        GameError::NoTilesLeft => "No Tiles Left: No tiles left to draw!".to_string(),
        GameError::GameOver(outcome) => outcome_message(*outcome),
    }
}

/// Check a parsed command against the current hand before it reaches the
/// engine, which treats a bad position as a bug
pub fn validate(command: Command, state: &GameState) -> Result<Command, CommandError> {
    if let Command::Play(index) = command {
        let hand_size = state.active_hand().len();
        if index >= hand_size {
            return Err(CommandError::OutOfRange {
                position: index + 1,
                hand_size,
            });
        }
    }
    Ok(command)
}

/// Run an interactive session until the game ends, the player quits, or
/// input runs out. Returns the outcome if the game finished.
pub fn run_session<R: BufRead, W: Write>(
    state: &mut GameState,
    input: R,
    output: &mut W,
) -> io::Result<Option<Outcome>> {
    writeln!(output, "{HELP}\n")?;
    write!(output, "{}", render(state))?;
    let mut lines = input.lines();

    loop {
        write!(output, "> ")?;
        output.flush()?;
        let Some(line) = lines.next().transpose()? else {
            return Ok(None);
        };

        let command = match parse_command(&line).and_then(|c| validate(c, state)) {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(err) => {
                writeln!(output, "{err}")?;
                continue;
            }
        };

        let result = match command {
            Command::Play(index) => state.play_tile(index).map(|report| {
                format!("{} played {}", report.player, report.tile)
            }),
            Command::Draw => state
                .draw_tile()
                .map(|tile| format!("{} drew {}", state.active_player(), tile)),
            Command::EndTurn => state.end_turn().map(|next| {
                // Nobody can move and nothing is left to draw: settle it here,
                // the engine only checks after a play.
                if state.is_blocked() {
                    state.check_terminal();
                }
                format!("Next Turn: {next}, it's your turn!")
            }),
            Command::Help => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            Command::Quit => return Ok(None),
        };

        match result {
            Ok(message) => writeln!(output, "{message}")?,
            Err(err) => writeln!(output, "{}", error_message(&err))?,
        }

        if let Some(outcome) = state.outcome() {
            writeln!(output, "{}", outcome_message(outcome))?;
            return Ok(Some(outcome));
        }
        write!(output, "\n{}", render(state))?;
    }
}
