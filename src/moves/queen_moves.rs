use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::bishop_reach;
use crate::moves::rook_moves::rook_reach;

#[inline]
pub fn queen_reach(square: Square, occupancy: u64) -> u64 {
    bishop_reach(square, occupancy) | rook_reach(square, occupancy)
}
