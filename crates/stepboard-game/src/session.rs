//! One game: owns the board, drives move regeneration, and answers the
//! host's pick-up and drop queries.

use std::fmt;

use tracing::{debug, info, warn};

use stepboard_core::{
    BoardState, Color, MoveGenerator, MoveList, MoveValidator, Piece, Square, SquareSource,
};

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::host::BoardHost;

/// Where the game is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No board has been set up yet.
    SetupPending,
    /// Waiting for the given side to move.
    ToMove(Color),
    /// The game was stopped and the board cleared.
    Stopped,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::SetupPending => write!(f, "setup pending"),
            Phase::ToMove(color) => write!(f, "{color} to move"),
            Phase::Stopped => write!(f, "stopped"),
        }
    }
}

/// A single game session.
///
/// The board is owned here; the bitboards and move list are caches inside
/// the [`MoveGenerator`] and are rebuilt in full whenever the board or the
/// side to move changes.
pub struct GameSession<H: BoardHost> {
    config: SessionConfig,
    host: H,
    board: BoardState,
    generator: MoveGenerator,
    phase: Phase,
    initial_state: String,
}

impl<H: BoardHost> GameSession<H> {
    /// Create a session waiting for setup.
    pub fn new(config: SessionConfig, host: H) -> Self {
        Self {
            config,
            host,
            board: BoardState::empty(),
            generator: MoveGenerator::new(),
            phase: Phase::SetupPending,
            initial_state: BoardState::empty().to_notation(),
        }
    }

    /// Load the configured starting placement with White to move.
    pub fn set_up_board(&mut self) {
        let placement = self.config.initial_placement.clone();
        self.set_up_from_placement(&placement);
    }

    /// Load `placement` (extra FEN fields ignored) with White to move.
    pub fn set_up_from_placement(&mut self, placement: &str) {
        self.board = BoardState::from_placement(placement);
        self.initial_state = self.board.to_notation();
        self.host.clear_highlights();
        self.start_turn(Color::White);
        info!(placement, pieces = self.board.occupied_count(), "board set up");
    }

    /// Current phase.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Side to move, if a game is in progress.
    #[inline]
    pub fn side_to_move(&self) -> Option<Color> {
        match self.phase {
            Phase::ToMove(color) => Some(color),
            _ => None,
        }
    }

    #[inline]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The move list legality queries are answered from.
    #[inline]
    pub fn moves(&self) -> &MoveList {
        self.generator.moves()
    }

    fn validator(&self) -> MoveValidator<'_> {
        MoveValidator::new(self.generator.moves())
    }

    /// May `piece` be picked up right now?
    pub fn can_move_from(&self, piece: Piece) -> bool {
        self.side_to_move()
            .is_some_and(|side| self.validator().can_originate(piece, side))
    }

    /// May the piece on `from` be dropped on `to`?
    pub fn can_move_from_to(&self, from: Square, to: Square) -> bool {
        self.side_to_move().is_some() && self.validator().is_legal_move(from, to)
    }

    /// Pick up whatever sits on `from`, highlighting its destinations.
    ///
    /// Returns `false` (and highlights nothing) for empty squares and for
    /// pieces of the side not to move.
    pub fn pick_up(&mut self, from: Square) -> bool {
        let Some(piece) = self.board.get(from) else {
            return false;
        };
        if !self.can_move_from(piece) {
            return false;
        }
        let targets = self.validator().destinations_from(from);
        self.host.clear_highlights();
        self.host.highlight(targets);
        true
    }

    /// Play `from -> to` on the session's own board and pass the turn.
    ///
    /// Returns the captured piece, if any.
    pub fn commit_move(&mut self, from: Square, to: Square) -> Result<Option<Piece>, SessionError> {
        let side = self.require_in_progress()?;
        if !self.validator().is_legal_move(from, to) {
            warn!(%from, %to, %side, "rejected move not in move list");
            return Err(SessionError::IllegalMove { from, to });
        }
        let captured = self.board.relocate(from, to);
        debug!(%from, %to, %side, ?captured, "move committed");
        self.end_turn(side);
        Ok(captured)
    }

    /// The host has already moved a piece on its own grid: adopt its layout
    /// and pass the turn.
    pub fn commit_from_source<S: SquareSource + ?Sized>(&mut self, source: &S) -> Result<(), SessionError> {
        let side = self.require_in_progress()?;
        self.board = BoardState::from_source(source);
        debug!(%side, "move committed by host");
        self.end_turn(side);
        Ok(())
    }

    /// Adopt the host's layout without passing the turn.
    pub fn sync_from<S: SquareSource + ?Sized>(&mut self, source: &S) -> Result<(), SessionError> {
        let side = self.require_in_progress()?;
        self.board = BoardState::from_source(source);
        self.generator.regenerate(&self.board, side);
        Ok(())
    }

    /// The board as a 64-character notation string.
    pub fn state_string(&self) -> String {
        self.board.to_notation()
    }

    /// The notation string captured at setup.
    pub fn initial_state_string(&self) -> &str {
        &self.initial_state
    }

    /// Restore a board from a notation string, decoded per the configured
    /// [`NotationImport`](stepboard_core::NotationImport) mode.
    ///
    /// The side to move is kept; moves are regenerated for it.
    pub fn set_state_string(&mut self, state: &str) -> Result<(), SessionError> {
        self.board = BoardState::from_notation(state, self.config.notation_import)?;
        if let Some(side) = self.side_to_move() {
            self.generator.regenerate(&self.board, side);
        }
        Ok(())
    }

    /// Stop the game: clear the board, drop the move list, reset the host.
    pub fn stop_game(&mut self) {
        self.board.clear();
        self.generator.reset();
        self.host.reset_squares();
        self.phase = Phase::Stopped;
        info!("game stopped");
    }

    fn require_in_progress(&self) -> Result<Color, SessionError> {
        match self.phase {
            Phase::ToMove(side) => Ok(side),
            Phase::SetupPending => Err(SessionError::NotSetUp),
            Phase::Stopped => Err(SessionError::Stopped),
        }
    }

    fn start_turn(&mut self, side: Color) {
        self.generator.regenerate(&self.board, side);
        self.phase = Phase::ToMove(side);
    }

    fn end_turn(&mut self, side: Color) {
        self.start_turn(side.flip());
        self.host.clear_highlights();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::NullHost;
    use stepboard_core::{NotationImport, PieceKind};

    fn started() -> GameSession<NullHost> {
        let mut session = GameSession::new(SessionConfig::default(), NullHost);
        session.set_up_board();
        session
    }

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn new_session_waits_for_setup() {
        let session = GameSession::new(SessionConfig::default(), NullHost);
        assert_eq!(session.phase(), Phase::SetupPending);
        assert!(!session.can_move_from(Piece::WHITE_KNIGHT));
        assert!(!session.can_move_from_to(Square::B1, Square::C3));
    }

    #[test]
    fn setup_starts_with_white() {
        let session = started();
        assert_eq!(session.phase(), Phase::ToMove(Color::White));
        assert_eq!(session.moves().len(), 4);
        assert_eq!(session.initial_state_string(), session.state_string());
    }

    #[test]
    fn only_side_to_move_may_pick_up() {
        let session = started();
        assert!(session.can_move_from(Piece::WHITE_PAWN));
        assert!(!session.can_move_from(Piece::BLACK_KNIGHT));
    }

    #[test]
    fn commit_passes_turn() {
        let mut session = started();
        assert!(session.can_move_from_to(Square::B1, Square::C3));
        session.commit_move(Square::B1, Square::C3).unwrap();
        assert_eq!(session.phase(), Phase::ToMove(Color::Black));
        assert!(!session.can_move_from_to(Square::G1, Square::F3));
        assert!(session.can_move_from_to(Square::B8, sq("c6")));
        assert_eq!(session.board().get(Square::C3), Some(Piece::WHITE_KNIGHT));
    }

    #[test]
    fn illegal_move_leaves_state_unchanged() {
        let mut session = started();
        let before = session.state_string();
        let err = session.commit_move(Square::E1, sq("e2")).unwrap_err();
        assert_eq!(
            err,
            SessionError::IllegalMove {
                from: Square::E1,
                to: sq("e2")
            }
        );
        assert_eq!(session.phase(), Phase::ToMove(Color::White));
        assert_eq!(session.state_string(), before);
    }

    #[test]
    fn commit_before_setup_fails() {
        let mut session = GameSession::new(SessionConfig::default(), NullHost);
        assert_eq!(
            session.commit_move(Square::B1, Square::C3),
            Err(SessionError::NotSetUp)
        );
    }

    #[test]
    fn stop_clears_everything() {
        let mut session = started();
        session.stop_game();
        assert_eq!(session.phase(), Phase::Stopped);
        assert_eq!(session.board().occupied_count(), 0);
        assert!(session.moves().is_empty());
        assert_eq!(
            session.commit_move(Square::B1, Square::C3),
            Err(SessionError::Stopped)
        );
    }

    #[test]
    fn state_string_roundtrip_keeps_side() {
        let mut session = started();
        session.commit_move(Square::G1, Square::F3).unwrap();
        let saved = session.state_string();

        let mut restored = started();
        restored.set_state_string(&saved).unwrap();
        assert_eq!(restored.board(), session.board());
        // The restored session still has White to move.
        assert!(restored.can_move_from_to(Square::F3, sq("e5")));
    }

    #[test]
    fn color_digit_state_creates_pawns() {
        let config = SessionConfig {
            notation_import: NotationImport::ColorDigits,
            ..SessionConfig::default()
        };
        let mut session = GameSession::new(config, NullHost);
        session.set_up_board();
        let mut state = "0".repeat(64);
        state.replace_range(0..1, "1");
        session.set_state_string(&state).unwrap();
        let piece = session.board().get(Square::A1).unwrap();
        assert_eq!(piece.kind(), PieceKind::Pawn);
        assert!(session.moves().is_empty());
    }

    #[test]
    fn bad_state_string_is_rejected() {
        let mut session = started();
        assert!(matches!(
            session.set_state_string("RNB"),
            Err(SessionError::InvalidState { .. })
        ));
        assert_eq!(session.board().occupied_count(), 32);
    }

    #[test]
    fn phase_display() {
        assert_eq!(Phase::ToMove(Color::Black).to_string(), "black to move");
        assert_eq!(Phase::SetupPending.to_string(), "setup pending");
    }
}
