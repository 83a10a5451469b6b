//! Canonical rule constants.
//!
//! Row 0 holds Black's back rank and row 7 holds White's, so White pawns
//! advance toward row 0.

use crate::game_state::chess_types::{Color, PieceKind};

/// Back-rank piece order from column 0 (file a) to column 7 (file h).
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece kind a pawn becomes on the far rank. Underpromotion is not offered.
pub const AUTO_PROMOTION_KIND: PieceKind = PieceKind::Queen;

#[inline]
pub const fn back_rank_row(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Pawns landing on either outer row promote, whichever side they belong to.
#[inline]
pub const fn is_promotion_row(row: u8) -> bool {
    row == 0 || row == 7
}
