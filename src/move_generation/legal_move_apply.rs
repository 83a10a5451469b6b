//! Make/unmake and the value-returning wrappers around them.
//!
//! `make_move` mutates a state in place and hands back the record needed to
//! reverse it. `apply_move` clones first, so callers holding the old state
//! keep it untouched.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{is_promotion_row, AUTO_PROMOTION_KIND};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::is_pseudo_legal;
use crate::utils::move_notation::move_notation;

/// Result of committing one move to a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMove {
    pub game_state: GameState,
    pub record: HistoryRecord,
    pub notation: String,
}

/// Move the piece on `mv.from` to `mv.to` and pass the turn.
///
/// The destination is not checked against the generated destinations. A pawn
/// landing on row 0 or row 7 always becomes a queen; `mv.promotion` is
/// recorded only when that happens.
pub fn make_move(game_state: &mut GameState, mv: &Move) -> ChessResult<HistoryRecord> {
    let moved_piece = game_state
        .board
        .take(mv.from)
        .ok_or(ChessError::NoPieceOnSquare(mv.from))?;

    let promotion = if moved_piece.kind == PieceKind::Pawn && is_promotion_row(mv.to.row()) {
        Some(AUTO_PROMOTION_KIND)
    } else {
        None
    };
    let landing_piece = Piece::new(promotion.unwrap_or(moved_piece.kind), moved_piece.color);
    let captured_piece = game_state.board.put(mv.to, landing_piece);

    let record = HistoryRecord {
        from: mv.from,
        to: mv.to,
        moved_piece,
        captured_piece,
        promotion,
        side_to_move_before: game_state.side_to_move,
    };
    game_state.side_to_move = game_state.side_to_move.opposite();

    Ok(record)
}

/// Reverse a record produced by [`make_move`] on this exact state.
pub fn unmake_move(game_state: &mut GameState, record: &HistoryRecord) {
    game_state.board.set(record.to, record.captured_piece);
    game_state.board.put(record.from, record.moved_piece);
    game_state.side_to_move = record.side_to_move_before;
}

/// Commit `mv` on a copy of `game_state`, trusting the caller that the move is pseudo-legal.
pub fn apply_move(game_state: &GameState, mv: &Move) -> ChessResult<AppliedMove> {
    let mut next = *game_state;
    let record = make_move(&mut next, mv)?;
    let notation = move_notation(&record);

    Ok(AppliedMove {
        game_state: next,
        record,
        notation,
    })
}

/// Like [`apply_move`], but refuses anything outside the generated destinations.
///
/// The moving piece must belong to the side to move, the destination must be
/// one of its destinations, and the requested promotion may only be absent
/// or the automatic queen.
pub fn apply_checked_move(game_state: &GameState, mv: &Move) -> ChessResult<AppliedMove> {
    validate_move(game_state, mv)?;
    apply_move(game_state, mv)
}

pub fn validate_move(game_state: &GameState, mv: &Move) -> ChessResult<()> {
    let piece = game_state
        .piece_at(mv.from)
        .ok_or(ChessError::NoPieceOnSquare(mv.from))?;

    if piece.color != game_state.side_to_move {
        return Err(ChessError::WrongSideToMove {
            square: mv.from,
            expected: game_state.side_to_move,
        });
    }

    let promotion_ok = matches!(mv.promotion, None | Some(AUTO_PROMOTION_KIND));
    if !promotion_ok || !is_pseudo_legal(game_state, mv) {
        return Err(ChessError::IllegalMove {
            from: mv.from,
            to: mv.to,
        });
    }

    Ok(())
}

/// Pop the newest record and return the state before it; `None` when there is nothing to undo.
pub fn undo_last_move(game_state: &GameState, history: &mut Vec<HistoryRecord>) -> Option<GameState> {
    let record = history.pop()?;
    let mut previous = *game_state;
    unmake_move(&mut previous, &record);
    Some(previous)
}
