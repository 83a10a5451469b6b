use crate::game_state::chess_types::*;

/// Turn a reach mask into destinations for a piece of `color`.
///
/// Squares held by `color` are dropped. Squares held by the other side
/// become captures. Only pawns promote, so `promotes` is always false here.
#[inline]
pub fn push_reach_destinations(board: &Board, color: Color, reach: u64, out: &mut Vec<Destination>) {
    let enemy_occ = board.occupancy(color.opposite());
    let targets = reach & !board.occupancy(color);

    out.extend(Square::iter_mask(targets).map(|square| Destination {
        square,
        is_capture: (square.mask() & enemy_occ) != 0,
        promotes: false,
    }));
}
