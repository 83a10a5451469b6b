use crate::game_state::chess_types::*;

/// Single undo record produced by every committed move.
///
/// Pieces are stored by value as they were before the move, so later board
/// mutation can never reach back into the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HistoryRecord {
    pub from: Square,
    pub to: Square,
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
    pub promotion: Option<PieceKind>,
    pub side_to_move_before: Color,
}

impl HistoryRecord {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }
}
