use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_reach_destinations;
use crate::moves::rook_moves::rook_reach;

pub fn generate_rook_destinations(
    board: &Board,
    from: Square,
    color: Color,
    out: &mut Vec<Destination>,
) {
    let reach = rook_reach(from, board.occupancy_all());
    push_reach_destinations(board, color, reach, out);
}
