//! Destination generation entry points.
//!
//! Dispatches on the piece kind of the selected square. Everything here is
//! pseudo-legal: moves that leave the mover's own king attacked are kept,
//! which is the ruleset this engine plays by.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::generate_bishop_destinations;
use crate::move_generation::legal_moves_king::generate_king_destinations;
use crate::move_generation::legal_moves_knight::generate_knight_destinations;
use crate::move_generation::legal_moves_pawn::generate_pawn_destinations;
use crate::move_generation::legal_moves_queen::generate_queen_destinations;
use crate::move_generation::legal_moves_rook::generate_rook_destinations;

/// Destinations for whatever piece stands on `square`; empty when the square is empty.
///
/// The piece's own color decides the geometry. Whether it is that color's
/// turn is the caller's concern.
pub fn legal_destinations(game_state: &GameState, square: Square) -> Vec<Destination> {
    let mut out = Vec::with_capacity(32);
    if let Some(piece) = game_state.piece_at(square) {
        generate_piece_destinations(&game_state.board, square, piece, &mut out);
    }
    out
}

/// Same as [`legal_destinations`] for raw coordinates, rejecting off-board input.
pub fn legal_destinations_at(
    game_state: &GameState,
    row: i32,
    col: i32,
) -> ChessResult<Vec<Destination>> {
    let square = Square::new(row, col)?;
    Ok(legal_destinations(game_state, square))
}

pub fn generate_piece_destinations(
    board: &Board,
    from: Square,
    piece: Piece,
    out: &mut Vec<Destination>,
) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_destinations(board, from, piece.color, out),
        PieceKind::Knight => generate_knight_destinations(board, from, piece.color, out),
        PieceKind::Bishop => generate_bishop_destinations(board, from, piece.color, out),
        PieceKind::Rook => generate_rook_destinations(board, from, piece.color, out),
        PieceKind::Queen => generate_queen_destinations(board, from, piece.color, out),
        PieceKind::King => generate_king_destinations(board, from, piece.color, out),
    }
}

/// Every pseudo-legal move of the side to move. Promotions carry the auto-queen.
pub fn all_pseudo_legal_moves(game_state: &GameState) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    let mut scratch = Vec::with_capacity(32);

    for (from, piece) in game_state.board.pieces_of(game_state.side_to_move) {
        scratch.clear();
        generate_piece_destinations(&game_state.board, from, piece, &mut scratch);
        moves.extend(scratch.iter().map(|dest| Move::from_destination(from, dest)));
    }

    moves
}

/// True when `mv.to` is among the destinations of the piece on `mv.from`.
pub fn is_pseudo_legal(game_state: &GameState, mv: &Move) -> bool {
    legal_destinations(game_state, mv.from)
        .iter()
        .any(|dest| dest.square == mv.to)
}
