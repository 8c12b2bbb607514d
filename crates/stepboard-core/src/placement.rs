//! Piece-placement import and export (the first field of a FEN string).
//!
//! Import is lenient: it never fails. Unknown letters become pawns, and
//! anything that would land off the board is dropped with a warning.

use tracing::warn;

use crate::board::BoardState;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Placement field of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Full FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl BoardState {
    /// Build a board from a placement string, rank 8 first.
    ///
    /// Parsing stops at the first space, so a full FEN is accepted; the
    /// remaining fields are not interpreted.
    pub fn from_placement(placement: &str) -> BoardState {
        let mut board = BoardState::empty();
        let mut rank: i32 = 7;
        let mut file: i32 = 0;

        for c in placement.chars() {
            if c == ' ' {
                break;
            }
            if c == '/' {
                rank -= 1;
                file = 0;
                continue;
            }
            if let Some(run) = c.to_digit(10) {
                file += run as i32;
                continue;
            }

            let kind = PieceKind::from_letter(c).unwrap_or_else(|| {
                warn!(character = %c, "unrecognized placement letter, using pawn");
                PieceKind::Pawn
            });
            let color = if c.is_uppercase() {
                Color::White
            } else {
                Color::Black
            };

            match Square::from_coords(file, rank) {
                Some(sq) => board.set(sq, Some(Piece::new(kind, color))),
                None => warn!(file, rank, character = %c, "placement runs off the board, dropping piece"),
            }
            file += 1;
        }

        board
    }

    /// Export the placement field, rank 8 first, with digit runs for empty squares.
    pub fn to_placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for rank in (0u8..8).rev() {
            let mut empty_run = 0u8;
            for file in 0u8..8 {
                let sq = Square::from_index_unchecked(rank * 8 + file);
                match self.get(sq) {
                    Some(piece) => {
                        if empty_run > 0 {
                            out.push((b'0' + empty_run) as char);
                            empty_run = 0;
                        }
                        out.push(piece.notation_char());
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                out.push((b'0' + empty_run) as char);
            }
            if rank > 0 {
                out.push('/');
            }
        }
        out
    }
}
