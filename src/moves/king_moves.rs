//! King reach tables: the eight adjacent squares, one step only.

use crate::game_state::chess_types::Square;
use crate::moves::knight_moves::set_if_valid;

pub const KING_TARGETS: [u64; 64] = generate_king_targets();

#[inline]
pub const fn king_targets(square: Square) -> u64 {
    KING_TARGETS[square.index()]
}

const fn generate_king_targets() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let col = (sq % 8) as i32;
        let mut targets = 0u64;

        targets |= set_if_valid(row - 1, col - 1);
        targets |= set_if_valid(row - 1, col);
        targets |= set_if_valid(row - 1, col + 1);
        targets |= set_if_valid(row, col - 1);
        targets |= set_if_valid(row, col + 1);
        targets |= set_if_valid(row + 1, col - 1);
        targets |= set_if_valid(row + 1, col);
        targets |= set_if_valid(row + 1, col + 1);

        table[sq] = targets;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::king_targets;
    use crate::game_state::chess_types::Square;

    #[test]
    fn king_target_counts_by_region() {
        assert_eq!(king_targets(Square::new(4, 4).unwrap()).count_ones(), 8);
        assert_eq!(king_targets(Square::new(7, 4).unwrap()).count_ones(), 5);
        assert_eq!(king_targets(Square::new(0, 7).unwrap()).count_ones(), 3);
    }
}
