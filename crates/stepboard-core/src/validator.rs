//! Legality queries against the most recently generated move list.

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::movegen::MoveList;
use crate::piece::Piece;
use crate::square::Square;

/// Answers pick-up and drop questions for one move list.
///
/// Queries are pure; a move list is only "current" until the next
/// regeneration.
#[derive(Clone, Copy, Debug)]
pub struct MoveValidator<'a> {
    moves: &'a MoveList,
}

impl<'a> MoveValidator<'a> {
    pub fn new(moves: &'a MoveList) -> MoveValidator<'a> {
        MoveValidator { moves }
    }

    /// May `piece` be picked up while `side` is to move?
    ///
    /// Only the color tag is compared; whether the piece has any move at all
    /// is not considered.
    #[inline]
    pub fn can_originate(&self, piece: Piece, side: Color) -> bool {
        piece.tag() & 128 == side.tag_bit()
    }

    /// Is `from -> to` in the move list? The piece kind is not compared.
    pub fn is_legal_move(&self, from: Square, to: Square) -> bool {
        self.moves.iter().any(|mv| mv.connects(from, to))
    }

    /// All destinations reachable from `from`, for highlighting.
    pub fn destinations_from(&self, from: Square) -> Bitboard {
        self.moves
            .iter()
            .filter(|mv| mv.from() == from)
            .map(|mv| mv.to())
            .collect()
    }
}
