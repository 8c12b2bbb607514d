//! The sixteen occupancy bitboards derived from a [`BoardState`].

use crate::bitboard::Bitboard;
use crate::board::BoardState;
use crate::color::Color;
use crate::error::BitboardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

/// Identifies one of the sixteen maintained bitboards.
///
/// The first twelve are per-(color, kind) boards in [`Piece::index`] order,
/// followed by the four aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BoardId {
    WhitePawns,
    WhiteKnights,
    WhiteBishops,
    WhiteRooks,
    WhiteQueens,
    WhiteKing,
    BlackPawns,
    BlackKnights,
    BlackBishops,
    BlackRooks,
    BlackQueens,
    BlackKing,
    AllWhite,
    AllBlack,
    Occupancy,
    EmptySquares,
}

impl BoardId {
    /// Total number of bitboards.
    pub const COUNT: usize = 16;

    const PIECE_BOARDS: [BoardId; Piece::COUNT] = [
        BoardId::WhitePawns,
        BoardId::WhiteKnights,
        BoardId::WhiteBishops,
        BoardId::WhiteRooks,
        BoardId::WhiteQueens,
        BoardId::WhiteKing,
        BoardId::BlackPawns,
        BoardId::BlackKnights,
        BoardId::BlackBishops,
        BoardId::BlackRooks,
        BoardId::BlackQueens,
        BoardId::BlackKing,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the per-piece board holding `piece`.
    #[inline]
    pub const fn for_piece(piece: Piece) -> BoardId {
        Self::PIECE_BOARDS[piece.index()]
    }

    /// Return the board a flat-notation character is recorded in.
    ///
    /// `'0'` maps to [`BoardId::EmptySquares`]; characters outside the
    /// notation alphabet map to `None`.
    #[inline]
    pub const fn for_notation(c: char) -> Option<BoardId> {
        if c == crate::notation::EMPTY_CHAR {
            return Some(BoardId::EmptySquares);
        }
        match Piece::from_notation_char(c) {
            Some(piece) => Some(BoardId::for_piece(piece)),
            None => None,
        }
    }

    /// Return the aggregate board for `color`.
    #[inline]
    pub const fn side(color: Color) -> BoardId {
        match color {
            Color::White => BoardId::AllWhite,
            Color::Black => BoardId::AllBlack,
        }
    }
}

/// One bitboard per [`BoardId`], rebuilt from scratch on every change.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BitboardSet {
    boards: [Bitboard; BoardId::COUNT],
}

impl BitboardSet {
    /// A set with every board empty, including [`BoardId::EmptySquares`].
    pub const fn cleared() -> BitboardSet {
        BitboardSet {
            boards: [Bitboard::EMPTY; BoardId::COUNT],
        }
    }

    /// Derive all sixteen boards from `board`.
    pub fn rebuild(board: &BoardState) -> BitboardSet {
        let mut set = BitboardSet::cleared();
        for sq in crate::square::Square::all() {
            let bit = sq.bitboard();
            match board.get(sq) {
                Some(piece) => {
                    set.boards[BoardId::for_piece(piece).index()] |= bit;
                    set.boards[BoardId::side(piece.color()).index()] |= bit;
                    set.boards[BoardId::Occupancy.index()] |= bit;
                }
                None => set.boards[BoardId::EmptySquares.index()] |= bit,
            }
        }
        set
    }

    #[inline]
    pub fn get(&self, id: BoardId) -> Bitboard {
        self.boards[id.index()]
    }

    /// Return the board for one (color, kind) pair.
    #[inline]
    pub fn pieces(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.get(BoardId::for_piece(Piece::new(kind, color)))
    }

    /// Return every square holding a piece of `color`.
    #[inline]
    pub fn side(&self, color: Color) -> Bitboard {
        self.get(BoardId::side(color))
    }

    #[inline]
    pub fn occupancy(&self) -> Bitboard {
        self.get(BoardId::Occupancy)
    }

    #[inline]
    pub fn empty_squares(&self) -> Bitboard {
        self.get(BoardId::EmptySquares)
    }

    /// Check the partition and aggregate invariants.
    pub fn validate(&self) -> Result<(), BitboardError> {
        let mut seen = Bitboard::EMPTY;
        for id in BoardId::PIECE_BOARDS {
            let bb = self.get(id);
            if (seen & bb).is_nonempty() {
                return Err(BitboardError::OverlappingPieces);
            }
            seen |= bb;
        }

        for color in Color::ALL {
            let union = PieceKind::ALL
                .into_iter()
                .fold(Bitboard::EMPTY, |acc, kind| acc | self.pieces(color, kind));
            if union != self.side(color) {
                let color = match color {
                    Color::White => "white",
                    Color::Black => "black",
                };
                return Err(BitboardError::InconsistentSide { color });
            }
        }

        if self.occupancy() != (self.side(Color::White) | self.side(Color::Black)) {
            return Err(BitboardError::InconsistentOccupancy);
        }
        if self.empty_squares() != !self.occupancy() {
            return Err(BitboardError::InconsistentEmpty);
        }
        Ok(())
    }
}

impl Default for BitboardSet {
    fn default() -> Self {
        Self::rebuild(&BoardState::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::{BitboardSet, BoardId};
    use crate::bitboard::Bitboard;
    use crate::board::BoardState;
    use crate::color::Color;
    use crate::error::BitboardError;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn notation_lookup() {
        assert_eq!(BoardId::for_notation('P'), Some(BoardId::WhitePawns));
        assert_eq!(BoardId::for_notation('p'), Some(BoardId::BlackPawns));
        assert_eq!(BoardId::for_notation('N'), Some(BoardId::WhiteKnights));
        assert_eq!(BoardId::for_notation('k'), Some(BoardId::BlackKing));
        assert_eq!(BoardId::for_notation('0'), Some(BoardId::EmptySquares));
        assert_eq!(BoardId::for_notation('W'), None);
        assert_eq!(BoardId::for_notation('x'), None);
    }

    #[test]
    fn piece_boards_follow_piece_index() {
        for piece in Piece::ALL {
            assert_eq!(BoardId::for_piece(piece).index(), piece.index());
        }
    }

    #[test]
    fn starting_position_boards() {
        let set = BitboardSet::rebuild(&BoardState::starting_position());
        set.validate().unwrap();
        assert_eq!(set.occupancy().count(), 32);
        assert_eq!(set.empty_squares().count(), 32);
        assert_eq!(set.side(Color::White).count(), 16);
        assert_eq!(set.side(Color::Black).count(), 16);
        assert_eq!(set.pieces(Color::White, PieceKind::Pawn).count(), 8);
        assert_eq!(set.pieces(Color::Black, PieceKind::Pawn).count(), 8);
        assert_eq!(
            set.pieces(Color::White, PieceKind::Knight),
            Square::B1.bitboard() | Square::G1.bitboard()
        );
        assert_eq!(set.get(BoardId::BlackKing), Square::E8.bitboard());
        assert_eq!(set.side(Color::White), Bitboard::new(0xFFFF));
    }

    #[test]
    fn empty_board_boards() {
        let set = BitboardSet::default();
        set.validate().unwrap();
        assert_eq!(set.occupancy(), Bitboard::EMPTY);
        assert_eq!(set.empty_squares(), Bitboard::FULL);
    }

    #[test]
    fn validate_reports_overlap() {
        let mut set = BitboardSet::rebuild(&BoardState::starting_position());
        set.boards[BoardId::WhiteQueens.index()] |= Square::B1.bitboard();
        assert_eq!(set.validate(), Err(BitboardError::OverlappingPieces));
    }

    #[test]
    fn validate_reports_stale_empty_board() {
        let mut set = BitboardSet::rebuild(&BoardState::starting_position());
        set.boards[BoardId::EmptySquares.index()] = Bitboard::EMPTY;
        assert_eq!(set.validate(), Err(BitboardError::InconsistentEmpty));
    }
}
