use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_reach_destinations;
use crate::moves::knight_moves::knight_targets;

pub fn generate_knight_destinations(
    board: &Board,
    from: Square,
    color: Color,
    out: &mut Vec<Destination>,
) {
    push_reach_destinations(board, color, knight_targets(from), out);
}
