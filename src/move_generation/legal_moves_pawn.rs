use crate::game_state::chess_rules::{is_promotion_row, pawn_start_row};
use crate::game_state::chess_types::*;
use crate::moves::pawn_moves::pawn_captures;

/// Pawn pushes and diagonal captures.
///
/// A double push needs the pawn on its start row with both the intermediate
/// and the landing square empty. Diagonals are only offered onto enemy
/// pieces; there is no en passant. Any shape that lands on row 0 or row 7 is
/// flagged as promoting.
pub fn generate_pawn_destinations(
    board: &Board,
    from: Square,
    color: Color,
    out: &mut Vec<Destination>,
) {
    let dir = color.pawn_direction();

    if let Some(one_step) = from.offset(dir, 0) {
        if board.is_empty(one_step) {
            out.push(Destination {
                square: one_step,
                is_capture: false,
                promotes: is_promotion_row(one_step.row()),
            });

            if from.row() == pawn_start_row(color) {
                if let Some(two_step) = one_step.offset(dir, 0) {
                    if board.is_empty(two_step) {
                        out.push(Destination {
                            square: two_step,
                            is_capture: false,
                            promotes: is_promotion_row(two_step.row()),
                        });
                    }
                }
            }
        }
    }

    let captures = pawn_captures(color, from) & board.occupancy(color.opposite());
    out.extend(Square::iter_mask(captures).map(|square| Destination {
        square,
        is_capture: true,
        promotes: is_promotion_row(square.row()),
    }));
}
