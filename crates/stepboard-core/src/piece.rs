//! Colored piece, packed into a single tag byte.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A colored piece, packed into a single byte tag.
///
/// Bit layout:
/// - bits 0-2: [`PieceKind`] ordinal (1-6)
/// - bit 7: [`Color`] (0 = White, 1 = Black)
///
/// Valid tags are 1-6 (White) and 129-134 (Black), so `tag & 128` is a
/// color test and `tag & 0x7F` recovers the kind.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    /// Number of distinct pieces.
    pub const COUNT: usize = 12;

    pub const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::White);
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::White);
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::White);
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Color::White);
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::White);
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);
    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::Black);
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::Black);
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::Black);
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Color::Black);
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::Black);
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);

    /// All 12 pieces: White in kind order, then Black.
    pub const ALL: [Piece; 12] = [
        Self::WHITE_PAWN,
        Self::WHITE_KNIGHT,
        Self::WHITE_BISHOP,
        Self::WHITE_ROOK,
        Self::WHITE_QUEEN,
        Self::WHITE_KING,
        Self::BLACK_PAWN,
        Self::BLACK_KNIGHT,
        Self::BLACK_BISHOP,
        Self::BLACK_ROOK,
        Self::BLACK_QUEEN,
        Self::BLACK_KING,
    ];

    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece(color.tag_bit() | kind.ordinal())
    }

    /// Decode a raw tag, returning `None` for anything but 1-6 or 129-134.
    #[inline]
    pub const fn from_tag(tag: u8) -> Option<Piece> {
        if tag & 0x78 != 0 {
            return None;
        }
        match PieceKind::from_ordinal(tag & 0x07) {
            Some(_) => Some(Piece(tag)),
            None => None,
        }
    }

    /// Return the raw tag.
    #[inline]
    pub const fn tag(self) -> u8 {
        self.0
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match PieceKind::from_ordinal(self.0 & 0x07) {
            Some(kind) => kind,
            None => PieceKind::Pawn,
        }
    }

    /// Return the color (bit 7).
    #[inline]
    pub const fn color(self) -> Color {
        if self.0 & 128 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Return a contiguous index 0-11: White 0-5, Black 6-11.
    #[inline]
    pub const fn index(self) -> usize {
        self.color().index() * PieceKind::COUNT + self.kind().index()
    }

    /// Return the notation character: `PNBRQK` for White, `pnbrqk` for Black.
    #[inline]
    pub const fn notation_char(self) -> char {
        let letter = self.kind().letter();
        match self.color() {
            Color::White => letter,
            Color::Black => letter.to_ascii_lowercase(),
        }
    }

    /// Parse a notation character; case selects the color.
    #[inline]
    pub const fn from_notation_char(c: char) -> Option<Piece> {
        match PieceKind::from_letter(c) {
            Some(kind) => {
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                Some(Piece::new(kind, color))
            }
            None => None,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.color() {
            Color::White => 'W',
            Color::Black => 'B',
        };
        write!(f, "{}{}", prefix, self.kind().letter())
    }
}
