//! Pawn capture tables. White captures toward row 0, Black toward row 7.

use crate::game_state::chess_types::{Color, Square};

pub const WHITE_PAWN_CAPTURES: [u64; 64] = generate_pawn_captures(-1);
pub const BLACK_PAWN_CAPTURES: [u64; 64] = generate_pawn_captures(1);

#[inline]
pub const fn pawn_captures(color: Color, square: Square) -> u64 {
    match color {
        Color::White => WHITE_PAWN_CAPTURES[square.index()],
        Color::Black => BLACK_PAWN_CAPTURES[square.index()],
    }
}

const fn generate_pawn_captures(d_row: i32) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32 + d_row;
        let col = (sq % 8) as i32;
        let mut targets = 0u64;

        if row >= 0 && row <= 7 {
            if col > 0 {
                targets |= 1u64 << (row as usize * 8 + (col - 1) as usize);
            }
            if col < 7 {
                targets |= 1u64 << (row as usize * 8 + (col + 1) as usize);
            }
        }

        table[sq] = targets;
        sq += 1;
    }

    table
}
