//! Error types for notation decoding and bitboard validation.

/// Errors from decoding a flat 64-character notation string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    /// The string does not describe exactly 64 squares.
    #[error("expected 64 notation characters, found {found}")]
    WrongLength {
        /// Number of characters found.
        found: usize,
    },
    /// A character is outside the alphabet of the selected import mode.
    #[error("invalid notation character '{character}' at square {index}")]
    InvalidChar {
        /// The offending character.
        character: char,
        /// Square index (0..63) where it appeared.
        index: usize,
    },
}

/// Errors from structural validation of a [`BitboardSet`](crate::bitboards::BitboardSet).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BitboardError {
    /// Two per-piece boards claim the same square.
    #[error("overlapping piece bitboards")]
    OverlappingPieces,
    /// A color aggregate is not the union of that color's piece boards.
    #[error("{color} aggregate is inconsistent with its piece boards")]
    InconsistentSide {
        /// Which side's aggregate is wrong.
        color: &'static str,
    },
    /// Occupancy is not the union of both color aggregates.
    #[error("occupancy bitboard is inconsistent with side bitboards")]
    InconsistentOccupancy,
    /// The empty-squares board is not the complement of occupancy.
    #[error("empty-squares bitboard is not the complement of occupancy")]
    InconsistentEmpty,
}

/// Error from parsing an algebraic square name such as `e4`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid square: \"{found}\"")]
pub struct SquareParseError {
    /// The text that failed to parse.
    pub found: String,
}
