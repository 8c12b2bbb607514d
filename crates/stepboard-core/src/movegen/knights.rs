//! Knight move generation.

use crate::attacks::knight_attacks;
use crate::bitboards::BitboardSet;
use crate::color::Color;
use crate::piece_kind::PieceKind;

use super::{MoveList, PieceMoves, push_step_moves};

/// Knight jumps onto any square not held by its own side.
pub struct KnightMoves;

impl PieceMoves for KnightMoves {
    fn kind(&self) -> PieceKind {
        PieceKind::Knight
    }

    fn push_moves(&self, set: &BitboardSet, side: Color, list: &mut MoveList) {
        let knights = set.pieces(side, PieceKind::Knight);
        push_step_moves(knights, knight_attacks, !set.side(side), PieceKind::Knight, list);
    }
}
