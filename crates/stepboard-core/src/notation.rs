//! Flat 64-character notation: one character per square, square 0 first.
//!
//! `0` marks an empty square; `PNBRQK` / `pnbrqk` mark White / Black pieces.

use std::fmt;
use std::str::FromStr;

use crate::board::BoardState;
use crate::color::Color;
use crate::error::NotationError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Character used for an empty square.
pub const EMPTY_CHAR: char = '0';

/// How [`BoardState::from_notation`] interprets non-empty characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotationImport {
    /// Decode kind and color from the piece letter; the exact inverse of
    /// [`BoardState::to_notation`].
    #[default]
    Full,
    /// Legacy save format: a digit `d > 0` creates a pawn for player `d - 1`.
    /// Piece kinds are not preserved.
    ColorDigits,
}

impl FromStr for NotationImport {
    type Err = String;

    fn from_str(s: &str) -> Result<NotationImport, String> {
        match s {
            "full" => Ok(NotationImport::Full),
            "color-digits" => Ok(NotationImport::ColorDigits),
            other => Err(format!("unknown notation import mode \"{other}\"")),
        }
    }
}

impl fmt::Display for NotationImport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationImport::Full => write!(f, "full"),
            NotationImport::ColorDigits => write!(f, "color-digits"),
        }
    }
}

impl BoardState {
    /// Export the board as 64 notation characters.
    pub fn to_notation(&self) -> String {
        Square::all()
            .map(|sq| self.get(sq).map_or(EMPTY_CHAR, Piece::notation_char))
            .collect()
    }

    /// Rebuild a board from 64 notation characters.
    pub fn from_notation(text: &str, mode: NotationImport) -> Result<BoardState, NotationError> {
        let found = text.chars().count();
        if found != Square::COUNT {
            return Err(NotationError::WrongLength { found });
        }

        let mut board = BoardState::empty();
        for (sq, c) in Square::all().zip(text.chars()) {
            let piece = match mode {
                NotationImport::Full => decode_full(c),
                NotationImport::ColorDigits => decode_color_digit(c),
            }
            .ok_or(NotationError::InvalidChar {
                character: c,
                index: sq.index(),
            })?;
            board.set(sq, piece);
        }
        Ok(board)
    }
}

/// `Some(None)` for an empty square, `Some(Some(_))` for a piece, `None` if invalid.
fn decode_full(c: char) -> Option<Option<Piece>> {
    if c == EMPTY_CHAR {
        Some(None)
    } else {
        Piece::from_notation_char(c).map(Some)
    }
}

fn decode_color_digit(c: char) -> Option<Option<Piece>> {
    match c.to_digit(10)? {
        0 => Some(None),
        d @ (1 | 2) => {
            let color = Color::from_player_number(d as u8 - 1);
            Some(Some(Piece::new(PieceKind::Pawn, color)))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::NotationImport;
    use crate::board::BoardState;
    use crate::error::NotationError;
    use crate::piece::Piece;
    use crate::square::Square;

    const START_NOTATION: &str = concat!(
        "RNBQKBNR",
        "PPPPPPPP",
        "00000000",
        "00000000",
        "00000000",
        "00000000",
        "pppppppp",
        "rnbqkbnr",
    );

    #[test]
    fn export_starting_position() {
        let text = BoardState::starting_position().to_notation();
        assert_eq!(text.len(), 64);
        assert_eq!(text, START_NOTATION);
    }

    #[test]
    fn full_import_is_exact_inverse() {
        let board = BoardState::starting_position();
        let back = BoardState::from_notation(&board.to_notation(), NotationImport::Full).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn full_import_rejects_digits() {
        let mut text = START_NOTATION.to_string();
        text.replace_range(20..21, "1");
        let err = BoardState::from_notation(&text, NotationImport::Full).unwrap_err();
        assert_eq!(err, NotationError::InvalidChar { character: '1', index: 20 });
    }

    #[test]
    fn color_digit_import_creates_pawns() {
        let mut text = "0".repeat(64);
        text.replace_range(1..2, "1");
        text.replace_range(62..63, "2");
        let board = BoardState::from_notation(&text, NotationImport::ColorDigits).unwrap();
        assert_eq!(board.occupied_count(), 2);
        assert_eq!(board.get(Square::B1), Some(Piece::WHITE_PAWN));
        assert_eq!(board.get(Square::G8), Some(Piece::BLACK_PAWN));
    }

    #[test]
    fn color_digit_import_rejects_letters() {
        let err = BoardState::from_notation(START_NOTATION, NotationImport::ColorDigits).unwrap_err();
        assert_eq!(err, NotationError::InvalidChar { character: 'R', index: 0 });
    }

    #[test]
    fn wrong_length_is_reported() {
        let err = BoardState::from_notation("0000", NotationImport::Full).unwrap_err();
        assert_eq!(err, NotationError::WrongLength { found: 4 });
    }

    #[test]
    fn mode_parsing() {
        assert_eq!("full".parse::<NotationImport>(), Ok(NotationImport::Full));
        assert_eq!(
            "color-digits".parse::<NotationImport>(),
            Ok(NotationImport::ColorDigits)
        );
        assert!("pawns".parse::<NotationImport>().is_err());
        assert_eq!(NotationImport::default(), NotationImport::Full);
        assert_eq!(NotationImport::ColorDigits.to_string(), "color-digits");
    }
}
