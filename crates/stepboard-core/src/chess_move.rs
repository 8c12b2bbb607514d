//! Candidate move: source, destination, and the moving piece kind.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A pseudo-legal move. Captures, promotions and check flags are not modelled.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    kind: PieceKind,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square, kind: PieceKind) -> Move {
        Move { from, to, kind }
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// The kind of the piece making the move.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return `true` if this move goes from `from` to `to`, whatever the piece.
    #[inline]
    pub fn connects(self, from: Square, to: Square) -> bool {
        self.from == from && self.to == to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}{})", self.kind, self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn accessors() {
        let mv = Move::new(Square::B1, Square::C3, PieceKind::Knight);
        assert_eq!(mv.from(), Square::B1);
        assert_eq!(mv.to(), Square::C3);
        assert_eq!(mv.kind(), PieceKind::Knight);
        assert!(mv.connects(Square::B1, Square::C3));
        assert!(!mv.connects(Square::C3, Square::B1));
    }

    #[test]
    fn formatting() {
        let mv = Move::new(Square::G1, Square::F3, PieceKind::Knight);
        assert_eq!(format!("{mv}"), "g1f3");
        assert_eq!(format!("{mv:?}"), "Move(Ng1f3)");
    }
}
