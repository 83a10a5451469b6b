//! Board plus side to move.
//!
//! `GameState` is a small `Copy` value. History lives outside of it (see
//! `HistoryRecord` and `GameSession`), so snapshots can be compared directly.

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::new_empty(),
            side_to_move: Color::White,
        }
    }
}

impl GameState {
    /// Empty board, White to move. Useful for setting up test positions.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Canonical initial position, White to move.
    #[inline]
    pub fn new_game() -> Self {
        Self {
            board: Board::starting_position(),
            side_to_move: Color::White,
        }
    }

    #[inline]
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
        }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    /// Builder-style placement for setting up positions.
    pub fn with_piece(mut self, square: Square, piece: Piece) -> Self {
        self.board.put(square, piece);
        self
    }
}
