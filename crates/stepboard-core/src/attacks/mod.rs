//! Attack generation for the step-moving pieces (knight, king).
//!
//! Both tables are built at compile time and are read-only for the life of
//! the process, so they can be shared freely.

mod tables;

use crate::bitboard::Bitboard;
use crate::piece_kind::PieceKind;
use crate::square::Square;

pub use self::tables::{KING_OFFSETS, KNIGHT_OFFSETS};
use self::tables::{KING_ATTACKS, KNIGHT_ATTACKS};

/// Return the squares a knight on `sq` attacks.
#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index()]
}

/// Return the squares a king on `sq` attacks.
#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index()]
}

/// Return the precomputed step pattern for `kind` from `sq`.
///
/// Only knights and kings have step tables; every other kind yields `None`.
#[inline]
pub fn generate(sq: Square, kind: PieceKind) -> Option<Bitboard> {
    match kind {
        PieceKind::Knight => Some(knight_attacks(sq)),
        PieceKind::King => Some(king_attacks(sq)),
        _ => None,
    }
}
