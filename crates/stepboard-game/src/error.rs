//! Session and configuration errors.

use stepboard_core::{NotationError, Square};

/// Errors returned when a session operation cannot be carried out.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The board has not been set up yet.
    #[error("no game in progress: board is not set up")]
    NotSetUp,

    /// The game was stopped; set up a new board first.
    #[error("game has been stopped")]
    Stopped,

    /// The move is not in the current move list.
    #[error("illegal move: {from}{to}")]
    IllegalMove {
        /// Source square.
        from: Square,
        /// Destination square.
        to: Square,
    },

    /// A saved state string could not be decoded.
    #[error("invalid state string: {source}")]
    InvalidState {
        /// The underlying notation error.
        #[from]
        source: NotationError,
    },
}

/// Errors from building a [`SessionConfig`](crate::SessionConfig).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An unrecognized notation import mode.
    #[error("invalid value for {key}: {reason}")]
    InvalidValue {
        /// The configuration key.
        key: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, SessionError};
    use stepboard_core::{NotationError, Square};

    #[test]
    fn illegal_move_display() {
        let err = SessionError::IllegalMove {
            from: Square::B1,
            to: Square::B8,
        };
        assert_eq!(format!("{err}"), "illegal move: b1b8");
    }

    #[test]
    fn notation_error_converts() {
        let err: SessionError = NotationError::WrongLength { found: 3 }.into();
        assert!(matches!(err, SessionError::InvalidState { .. }));
        assert_eq!(
            format!("{err}"),
            "invalid state string: expected 64 notation characters, found 3"
        );
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::InvalidValue {
            key: "STEPBOARD_NOTATION_IMPORT",
            reason: "nope".to_string(),
        };
        assert_eq!(format!("{err}"), "invalid value for STEPBOARD_NOTATION_IMPORT: nope");
    }
}
