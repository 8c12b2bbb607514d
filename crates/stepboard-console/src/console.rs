//! Synchronous read-eval-print loop over a [`GameSession`].

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use stepboard_core::{Bitboard, Square};
use stepboard_game::{BoardHost, GameSession, SessionConfig};

use crate::command::{Command, parse_command};
use crate::error::ConsoleError;

/// Host that logs highlight changes; the console has no grid to draw on.
#[derive(Debug, Default)]
pub struct LogHost;

impl BoardHost for LogHost {
    fn clear_highlights(&mut self) {
        debug!("clear highlights");
    }

    fn highlight(&mut self, squares: Bitboard) {
        let names: Vec<String> = squares.map(|sq| sq.to_string()).collect();
        debug!(squares = %names.join(" "), "highlight");
    }

    fn reset_squares(&mut self) {
        debug!("reset squares");
    }
}

/// Reads one command per line from `input` and writes replies to `output`.
pub struct Console<R, W> {
    input: R,
    output: W,
    session: GameSession<LogHost>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(config: SessionConfig, input: R, output: W) -> Self {
        Self {
            input,
            output,
            session: GameSession::new(config, LogHost),
        }
    }

    /// Run until `quit` or end of input.
    pub fn run(mut self) -> Result<(), ConsoleError> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.dispatch(cmd)?,
                Err(e) => {
                    warn!(error = %e, "console parse error");
                    writeln!(self.output, "error {e}")?;
                }
            }
            self.output.flush()?;
        }

        info!("console shutting down");
        Ok(())
    }

    fn dispatch(&mut self, cmd: Command) -> Result<(), ConsoleError> {
        match cmd {
            Command::Setup(placement) => self.handle_setup(placement),
            Command::Placement => {
                writeln!(self.output, "{}", self.session.board().to_placement())?;
                Ok(())
            }
            Command::State => {
                writeln!(self.output, "{}", self.session.state_string())?;
                Ok(())
            }
            Command::SetState(state) => self.handle_setstate(&state),
            Command::PickUp(sq) => self.handle_pickup(sq),
            Command::Check(from, to) => {
                let answer = if self.session.can_move_from_to(from, to) { "yes" } else { "no" };
                writeln!(self.output, "{answer}")?;
                Ok(())
            }
            Command::Move(from, to) => self.handle_move(from, to),
            Command::Moves => self.handle_moves(),
            Command::Board => {
                writeln!(self.output, "{}", self.session.board().pretty())?;
                writeln!(self.output, "{}", self.session.phase())?;
                Ok(())
            }
            Command::Stop => {
                self.session.stop_game();
                writeln!(self.output, "ok")?;
                Ok(())
            }
            Command::Quit => Ok(()),
            Command::Unknown(name) => {
                if !name.is_empty() {
                    warn!(command = %name, "unknown command");
                    writeln!(self.output, "unknown {name}")?;
                }
                Ok(())
            }
        }
    }

    fn handle_setup(&mut self, placement: Option<String>) -> Result<(), ConsoleError> {
        match placement {
            Some(placement) => self.session.set_up_from_placement(&placement),
            None => self.session.set_up_board(),
        }
        writeln!(self.output, "ok")?;
        Ok(())
    }

    fn handle_setstate(&mut self, state: &str) -> Result<(), ConsoleError> {
        match self.session.set_state_string(state) {
            Ok(()) => writeln!(self.output, "ok")?,
            Err(e) => {
                warn!(error = %e, "setstate rejected");
                writeln!(self.output, "error {e}")?;
            }
        }
        Ok(())
    }

    fn handle_pickup(&mut self, sq: Square) -> Result<(), ConsoleError> {
        if self.session.pick_up(sq) {
            let targets: Vec<String> = self
                .session
                .moves()
                .iter()
                .filter(|mv| mv.from() == sq)
                .map(|mv| mv.to().to_string())
                .collect();
            writeln!(self.output, "targets {}", targets.join(" "))?;
        } else {
            writeln!(self.output, "no")?;
        }
        Ok(())
    }

    fn handle_move(&mut self, from: Square, to: Square) -> Result<(), ConsoleError> {
        match self.session.commit_move(from, to) {
            Ok(_) => writeln!(self.output, "ok")?,
            Err(e) => {
                warn!(error = %e, "move rejected");
                writeln!(self.output, "illegal")?;
            }
        }
        Ok(())
    }

    fn handle_moves(&mut self) -> Result<(), ConsoleError> {
        let list: Vec<String> = self.session.moves().iter().map(|mv| mv.to_string()).collect();
        writeln!(self.output, "moves {}", list.join(" "))?;
        Ok(())
    }
}
