//! Precomputed step-piece attack tables.

use crate::bitboard::Bitboard;

/// Knight jumps as `(d_file, d_rank)`.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1), (-2, 1), (2, -1), (-2, -1),
    (1, 2), (-1, 2), (1, -2), (-1, -2),
];

/// King steps as `(d_file, d_rank)`; every unit offset except `(0, 0)`.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0), (-1, 0),
    (0, 1), (0, -1),
    (1, -1), (-1, 1),
    (1, 1), (-1, -1),
];

/// Squares reachable from `sq` by any of `offsets`, clipped at the board edges.
pub(crate) const fn step_targets(sq: usize, offsets: &[(i8, i8); 8]) -> Bitboard {
    let file = (sq % 8) as i8;
    let rank = (sq / 8) as i8;
    let mut bits = 0u64;
    let mut i = 0;
    while i < 8 {
        let f = file + offsets[i].0;
        let r = rank + offsets[i].1;
        if f >= 0 && f < 8 && r >= 0 && r < 8 {
            bits |= 1u64 << (r as usize * 8 + f as usize);
        }
        i += 1;
    }
    Bitboard::new(bits)
}

const fn compute_table(offsets: &[(i8, i8); 8]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut sq = 0usize;
    while sq < 64 {
        table[sq] = step_targets(sq, offsets);
        sq += 1;
    }
    table
}

pub(crate) static KNIGHT_ATTACKS: [Bitboard; 64] = compute_table(&KNIGHT_OFFSETS);
pub(crate) static KING_ATTACKS: [Bitboard; 64] = compute_table(&KING_OFFSETS);
