//! Pseudo-legal move generation for the step-moving pieces.
//!
//! Each piece kind contributes moves through a [`PieceMoves`] strategy. Only
//! knights and kings have strategies; pawns and sliders produce nothing, and
//! no move is filtered for leaving the king in check.

mod king;
mod knights;

use tracing::debug;

use crate::bitboard::Bitboard;
use crate::bitboards::BitboardSet;
use crate::board::BoardState;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

pub use self::king::KingMoves;
pub use self::knights::KnightMoves;

/// Generates candidate moves for one piece kind.
pub trait PieceMoves: Sync {
    /// The piece kind this strategy moves.
    fn kind(&self) -> PieceKind;

    /// Append every candidate move for `side`'s pieces of this kind.
    fn push_moves(&self, set: &BitboardSet, side: Color, list: &mut MoveList);
}

/// Strategies run by [`generate_moves`], knights first.
pub static STRATEGIES: [&dyn PieceMoves; 2] = [&KnightMoves, &KingMoves];

/// Ordered list of generated moves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: Vec::with_capacity(32),
        }
    }

    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Push a move from every piece in `pieces` to every square of its step
/// pattern that is also in `allowed`.
pub(crate) fn push_step_moves(
    pieces: Bitboard,
    pattern: fn(Square) -> Bitboard,
    allowed: Bitboard,
    kind: PieceKind,
    list: &mut MoveList,
) {
    for from in pieces {
        for to in pattern(from) & allowed {
            list.push(Move::new(from, to, kind));
        }
    }
}

/// Generate every candidate move for `side` from a bitboard snapshot.
pub fn generate_moves(set: &BitboardSet, side: Color) -> MoveList {
    let mut list = MoveList::new();
    for strategy in STRATEGIES.iter() {
        strategy.push_moves(set, side, &mut list);
    }
    list
}

/// Owns the derived bitboards and the most recent move list.
///
/// Both are caches of a [`BoardState`]: the only way to change them is
/// [`MoveGenerator::regenerate`].
#[derive(Clone, Debug, Default)]
pub struct MoveGenerator {
    bitboards: BitboardSet,
    moves: MoveList,
    side: Option<Color>,
}

impl MoveGenerator {
    pub fn new() -> MoveGenerator {
        MoveGenerator::default()
    }

    /// Rebuild the bitboards from `board` and regenerate moves for `side`.
    pub fn regenerate(&mut self, board: &BoardState, side: Color) -> &MoveList {
        self.bitboards = BitboardSet::rebuild(board);
        self.moves = generate_moves(&self.bitboards, side);
        self.side = Some(side);
        debug!(%side, moves = self.moves.len(), "regenerated moves");
        &self.moves
    }

    /// Drop the cached moves, e.g. when the game ends.
    pub fn reset(&mut self) {
        self.bitboards = BitboardSet::default();
        self.moves.clear();
        self.side = None;
    }

    #[inline]
    pub fn bitboards(&self) -> &BitboardSet {
        &self.bitboards
    }

    #[inline]
    pub fn moves(&self) -> &MoveList {
        &self.moves
    }

    /// Side the current move list was generated for.
    #[inline]
    pub fn side(&self) -> Option<Color> {
        self.side
    }
}
