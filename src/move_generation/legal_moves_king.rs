use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_reach_destinations;
use crate::moves::king_moves::king_targets;

/// One-step king moves. Castling does not exist in this ruleset and
/// attacked squares are not filtered.
pub fn generate_king_destinations(
    board: &Board,
    from: Square,
    color: Color,
    out: &mut Vec<Destination>,
) {
    push_reach_destinations(board, color, king_targets(from), out);
}
