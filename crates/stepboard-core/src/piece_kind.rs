//! Piece kinds, without color.

use std::fmt;

/// The kind of a piece. Ordinals start at 1 so that 0 can mean "empty" in
/// packed tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl PieceKind {
    /// Total number of piece kinds.
    pub const COUNT: usize = 6;

    /// All piece kinds in ordinal order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Return the ordinal (1..=6).
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Return a zero-based index (0..6) for fixed-size arrays.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// Return the kind for an ordinal, or `None` outside `1..=6`.
    #[inline]
    pub const fn from_ordinal(ordinal: u8) -> Option<PieceKind> {
        match ordinal {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Return the uppercase notation letter.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Parse a notation letter (case-insensitive).
    #[inline]
    pub const fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Parse a notation letter, treating anything unrecognized as a Pawn.
    #[inline]
    pub const fn from_letter_lenient(c: char) -> PieceKind {
        match PieceKind::from_letter(c) {
            Some(kind) => kind,
            None => PieceKind::Pawn,
        }
    }

    /// Return `true` for the kinds that move by fixed steps (Knight, King).
    #[inline]
    pub const fn is_stepper(self) -> bool {
        matches!(self, PieceKind::Knight | PieceKind::King)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::PieceKind;

    #[test]
    fn ordinals_start_at_one() {
        assert_eq!(PieceKind::Pawn.ordinal(), 1);
        assert_eq!(PieceKind::King.ordinal(), 6);
        assert_eq!(PieceKind::Pawn.index(), 0);
        assert_eq!(PieceKind::King.index(), 5);
        assert_eq!(PieceKind::from_ordinal(0), None);
        assert_eq!(PieceKind::from_ordinal(7), None);
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_ordinal(kind.ordinal()), Some(kind));
        }
    }

    #[test]
    fn letters_case_insensitive() {
        for kind in PieceKind::ALL {
            let c = kind.letter();
            assert_eq!(PieceKind::from_letter(c), Some(kind));
            assert_eq!(PieceKind::from_letter(c.to_ascii_lowercase()), Some(kind));
        }
    }

    #[test]
    fn lenient_defaults_to_pawn() {
        assert_eq!(PieceKind::from_letter('x'), None);
        assert_eq!(PieceKind::from_letter_lenient('x'), PieceKind::Pawn);
        assert_eq!(PieceKind::from_letter_lenient('W'), PieceKind::Pawn);
        assert_eq!(PieceKind::from_letter_lenient('q'), PieceKind::Queen);
    }

    #[test]
    fn steppers() {
        assert!(PieceKind::Knight.is_stepper());
        assert!(PieceKind::King.is_stepper());
        assert!(!PieceKind::Rook.is_stepper());
        assert!(!PieceKind::Pawn.is_stepper());
    }
}
