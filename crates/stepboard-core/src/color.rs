//! Side colors.

use std::fmt;
use std::ops::Not;

/// A side: White or Black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Total number of colors.
    pub const COUNT: usize = 2;

    /// All colors in index order.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Return the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the player number used by the host grid (0 for White, 1 for Black).
    #[inline]
    pub const fn player_number(self) -> u8 {
        self as u8
    }

    /// Return the color for a host player number; anything nonzero is Black.
    #[inline]
    pub const fn from_player_number(n: u8) -> Color {
        if n == 0 { Color::White } else { Color::Black }
    }

    /// Return the tag bit carried by pieces of this color (0 or 128).
    #[inline]
    pub const fn tag_bit(self) -> u8 {
        (self as u8) << 7
    }

    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn tag_bits() {
        assert_eq!(Color::White.tag_bit(), 0);
        assert_eq!(Color::Black.tag_bit(), 128);
    }

    #[test]
    fn player_numbers() {
        assert_eq!(Color::White.player_number(), 0);
        assert_eq!(Color::Black.player_number(), 1);
        assert_eq!(Color::from_player_number(0), Color::White);
        assert_eq!(Color::from_player_number(1), Color::Black);
    }

    #[test]
    fn flip_and_not() {
        assert_eq!(Color::White.flip(), Color::Black);
        assert_eq!(!Color::Black, Color::White);
        assert_eq!(!!Color::White, Color::White);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Color::White), "white");
        assert_eq!(format!("{}", Color::Black), "black");
    }
}
