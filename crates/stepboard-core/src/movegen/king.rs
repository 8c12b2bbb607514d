//! King step generation. No check or castling logic.

use crate::attacks::king_attacks;
use crate::bitboards::BitboardSet;
use crate::color::Color;
use crate::piece_kind::PieceKind;

use super::{MoveList, PieceMoves, push_step_moves};

/// King steps one square in any direction onto a square not held by its own side.
pub struct KingMoves;

impl PieceMoves for KingMoves {
    fn kind(&self) -> PieceKind {
        PieceKind::King
    }

    fn push_moves(&self, set: &BitboardSet, side: Color, list: &mut MoveList) {
        let kings = set.pieces(side, PieceKind::King);
        push_step_moves(kings, king_attacks, !set.side(side), PieceKind::King, list);
    }
}
