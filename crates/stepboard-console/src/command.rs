//! Console command parsing.

use stepboard_core::Square;

use crate::error::ConsoleError;

/// A parsed console command.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// `setup [placement ...]` -- start a game from the configured or given placement.
    Setup(Option<String>),
    /// `placement` -- print the placement string.
    Placement,
    /// `state` -- print the 64-character state string.
    State,
    /// `setstate <64 chars>` -- restore a saved state string.
    SetState(String),
    /// `pickup <square>` -- pick up a piece and highlight its destinations.
    PickUp(Square),
    /// `check <move>` -- ask whether a move is legal without playing it.
    Check(Square, Square),
    /// `move <move>` -- play a move.
    Move(Square, Square),
    /// `moves` -- list the current move list.
    Moves,
    /// `board` -- print the board grid.
    Board,
    /// `stop` -- stop the game.
    Stop,
    /// `quit` -- exit.
    Quit,
    /// Unrecognized command (ignored).
    Unknown(String),
}

/// Parse a single input line into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ConsoleError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "setup" => {
            let placement = (tokens.len() > 1).then(|| tokens[1..].join(" "));
            Ok(Command::Setup(placement))
        }
        "placement" => Ok(Command::Placement),
        "state" => Ok(Command::State),
        "setstate" => {
            let state = tokens.get(1).ok_or(ConsoleError::MissingArgument {
                command: "setstate",
            })?;
            Ok(Command::SetState(state.to_string()))
        }
        "pickup" => {
            let text = tokens.get(1).ok_or(ConsoleError::MissingArgument { command: "pickup" })?;
            Ok(Command::PickUp(parse_square(text)?))
        }
        "check" => {
            let (from, to) = parse_move(tokens.get(1), "check")?;
            Ok(Command::Check(from, to))
        }
        "move" => {
            let (from, to) = parse_move(tokens.get(1), "move")?;
            Ok(Command::Move(from, to))
        }
        "moves" => Ok(Command::Moves),
        "board" => Ok(Command::Board),
        "stop" => Ok(Command::Stop),
        "quit" => Ok(Command::Quit),
        other => Ok(Command::Unknown(other.to_string())),
    }
}

fn parse_square(text: &str) -> Result<Square, ConsoleError> {
    text.parse().map_err(|_| ConsoleError::InvalidSquare {
        text: text.to_string(),
    })
}

/// Parse a move written as two concatenated squares, e.g. `b1c3`.
fn parse_move(token: Option<&&str>, command: &'static str) -> Result<(Square, Square), ConsoleError> {
    let text: &str = token.ok_or(ConsoleError::MissingArgument { command })?;
    let invalid = || ConsoleError::InvalidMove {
        text: text.to_string(),
    };
    if text.len() != 4 || !text.is_ascii() {
        return Err(invalid());
    }
    let from = text[..2].parse().map_err(|_| invalid())?;
    let to = text[2..].parse().map_err(|_| invalid())?;
    Ok((from, to))
}
