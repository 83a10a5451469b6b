//! Orthogonal ray casting.
//!
//! `trace_ray` walks from a square until the board edge or the first occupied
//! square. The blocker is included so callers can decide between capture and
//! exclusion by masking with own occupancy.

use crate::game_state::chess_types::Square;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

#[inline]
pub fn rook_reach(square: Square, occupancy: u64) -> u64 {
    ROOK_DIRECTIONS
        .iter()
        .fold(0u64, |acc, &(d_row, d_col)| {
            acc | trace_ray(square, d_row, d_col, occupancy)
        })
}

pub fn trace_ray(square: Square, d_row: i8, d_col: i8, occupancy: u64) -> u64 {
    let mut reach = 0u64;
    let mut cursor = square.offset(d_row, d_col);

    while let Some(target) = cursor {
        reach |= target.mask();

        if (occupancy & target.mask()) != 0 {
            break;
        }

        cursor = target.offset(d_row, d_col);
    }

    reach
}
