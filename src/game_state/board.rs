//! Fixed 64-cell board with occupancy caches.
//!
//! Cells are stored row-major. `put` and `take` are the only mutators, which
//! keeps the per-color occupancy bitboards in sync with the cell array.

use crate::game_state::chess_rules::{back_rank_row, pawn_start_row, BACK_RANK};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; 64],
    occupancy_by_color: [u64; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: [None; 64],
            occupancy_by_color: [0; 2],
        }
    }
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard opening layout, 16 pieces per side.
    pub fn starting_position() -> Self {
        let mut board = Self::default();
        for color in [Color::White, Color::Black] {
            let back = back_rank_row(color) as i32;
            let pawns = pawn_start_row(color) as i32;
            for (col, kind) in BACK_RANK.iter().enumerate() {
                let col = col as i32;
                if let Ok(sq) = Square::new(back, col) {
                    board.put(sq, Piece::new(*kind, color));
                }
                if let Ok(sq) = Square::new(pawns, col) {
                    board.put(sq, Piece::new(PieceKind::Pawn, color));
                }
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.index()]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.cells[square.index()].is_none()
    }

    /// Place `piece` on `square`, returning whatever was there before.
    pub fn put(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        let previous = self.take(square);
        self.cells[square.index()] = Some(piece);
        self.occupancy_by_color[piece.color.index()] |= square.mask();
        previous
    }

    /// Remove and return the occupant of `square`.
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        let previous = self.cells[square.index()].take();
        if let Some(piece) = previous {
            self.occupancy_by_color[piece.color.index()] &= !square.mask();
        }
        previous
    }

    /// Restore `square` to an exact prior value, empty included.
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        match piece {
            Some(piece) => {
                self.put(square, piece);
            }
            None => {
                self.take(square);
            }
        }
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> u64 {
        self.occupancy_by_color[color.index()]
    }

    #[inline]
    pub fn occupancy_all(&self) -> u64 {
        self.occupancy_by_color[0] | self.occupancy_by_color[1]
    }

    pub fn piece_count(&self) -> usize {
        self.occupancy_all().count_ones() as usize
    }

    /// Occupied squares with their pieces, in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter_mask(self.occupancy_all())
            .filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter_mask(self.occupancy(color))
            .filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }
}
