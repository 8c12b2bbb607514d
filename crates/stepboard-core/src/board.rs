//! Board state: at most one piece per square.

use std::fmt;

use crate::color::Color;
use crate::piece::Piece;
use crate::square::Square;

/// Per-square read access to a piece layout.
///
/// Implemented by [`BoardState`] and by any external grid that wants to feed
/// its layout into this crate. Coordinates outside `0..8` must report `None`.
pub trait SquareSource {
    /// Return the piece at `(file, rank)`, if any.
    fn piece_at(&self, file: i32, rank: i32) -> Option<Piece>;

    /// Return the side owning the piece at `(file, rank)`, if any.
    fn owner_at(&self, file: i32, rank: i32) -> Option<Color> {
        self.piece_at(file, rank).map(Piece::color)
    }
}

/// Mapping from square to optional piece.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BoardState {
    squares: [Option<Piece>; Square::COUNT],
}

impl BoardState {
    /// Return a board with no pieces.
    pub const fn empty() -> BoardState {
        BoardState {
            squares: [None; Square::COUNT],
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> BoardState {
        BoardState::from_placement(crate::placement::STARTING_PLACEMENT)
    }

    /// Copy a layout out of any [`SquareSource`].
    pub fn from_source<S: SquareSource + ?Sized>(source: &S) -> BoardState {
        let mut board = BoardState::empty();
        for sq in Square::all() {
            board.squares[sq.index()] = source.piece_at(sq.file() as i32, sq.rank() as i32);
        }
        board
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Place `piece` on `sq`, replacing whatever was there.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece;
    }

    /// Remove every piece.
    pub fn clear(&mut self) {
        self.squares = [None; Square::COUNT];
    }

    /// Move the piece on `from` to `to`, capturing anything on `to`.
    ///
    /// Returns the captured piece. Does nothing if `from` is empty.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let piece = self.squares[from.index()].take()?;
        self.squares[to.index()].replace(piece)
    }

    /// Iterate over occupied squares in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|sq| sq.is_some()).count()
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::empty()
    }
}

impl SquareSource for BoardState {
    fn piece_at(&self, file: i32, rank: i32) -> Option<Piece> {
        Square::from_coords(file, rank).and_then(|sq| self.get(sq))
    }
}

impl fmt::Debug for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoardState(\"{}\")", self.to_placement())
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, rank 8 on top.
pub struct PrettyBoard<'a>(&'a BoardState);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{}  ", rank + 1)?;
            for file in 0..8 {
                let c = self.0.piece_at(file, rank).map_or('.', Piece::notation_char);
                if file < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardState, SquareSource};
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn empty_board_has_no_pieces() {
        let board = BoardState::empty();
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board, BoardState::default());
    }

    #[test]
    fn starting_position_layout() {
        let board = BoardState::starting_position();
        assert_eq!(board.occupied_count(), 32);
        assert_eq!(board.get(Square::E1), Some(Piece::WHITE_KING));
        assert_eq!(board.get(Square::B1), Some(Piece::WHITE_KNIGHT));
        assert_eq!(board.get(Square::E8), Some(Piece::BLACK_KING));
        assert_eq!(board.get(Square::E4), None);
    }

    #[test]
    fn out_of_range_queries_are_empty() {
        let board = BoardState::starting_position();
        assert_eq!(board.piece_at(-1, 0), None);
        assert_eq!(board.piece_at(8, 0), None);
        assert_eq!(board.owner_at(0, 8), None);
        assert_eq!(board.owner_at(0, 0), Some(Color::White));
        assert_eq!(board.owner_at(4, 7), Some(Color::Black));
        assert_eq!(board.owner_at(4, 4), None);
    }

    #[test]
    fn relocate_captures() {
        let mut board = BoardState::empty();
        board.set(Square::B1, Some(Piece::WHITE_KNIGHT));
        board.set(Square::C3, Some(Piece::BLACK_PAWN));
        let captured = board.relocate(Square::B1, Square::C3);
        assert_eq!(captured, Some(Piece::BLACK_PAWN));
        assert_eq!(board.get(Square::B1), None);
        assert_eq!(board.get(Square::C3), Some(Piece::WHITE_KNIGHT));
        assert_eq!(board.relocate(Square::A1, Square::A3), None);
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn from_source_copies_layout() {
        let start = BoardState::starting_position();
        let copy = BoardState::from_source(&start);
        assert_eq!(copy, start);
    }

    #[test]
    fn pieces_iterates_in_order() {
        let board = BoardState::starting_position();
        let first: Vec<_> = board.pieces().take(2).collect();
        assert_eq!(first[0], (Square::A1, Piece::WHITE_ROOK));
        assert_eq!(first[1], (Square::B1, Piece::WHITE_KNIGHT));
    }

    #[test]
    fn pretty_print() {
        let output = format!("{}", BoardState::starting_position().pretty());
        assert!(output.contains("8  r n b q k b n r"));
        assert!(output.contains("1  R N B Q K B N R"));
        assert!(output.contains("4  . . . . . . . ."));
        assert!(output.ends_with("a b c d e f g h"));
    }
}
