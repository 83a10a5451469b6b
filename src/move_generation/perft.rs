//! Pseudo-legal perft.
//!
//! Counts leaf nodes of the move tree, tallying captures and promotions on the
//! final ply. Used to cross-check generation and make/unmake against each
//! other; kings can be captured here, as in play.

use std::thread;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, make_move, unmake_move};
use crate::move_generation::legal_move_generator::all_pseudo_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
    }
}

/// Perft that walks the tree with make/unmake on a single state.
pub fn perft(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    let mut state = *game_state;
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return Ok(total);
    }
    perft_make_unmake(&mut state, depth, &mut total)?;
    Ok(total)
}

fn perft_make_unmake(state: &mut GameState, depth: u8, counts: &mut PerftCounts) -> ChessResult<()> {
    for mv in all_pseudo_legal_moves(state) {
        let record = make_move(state, &mv)?;
        if depth == 1 {
            tally_leaf(&record, counts);
        } else {
            perft_make_unmake(state, depth - 1, counts)?;
        }
        unmake_move(state, &record);
    }
    Ok(())
}

/// Perft that copies the state for every child instead of unmaking.
pub fn perft_copy(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return Ok(total);
    }
    for mv in all_pseudo_legal_moves(game_state) {
        let applied = apply_move(game_state, &mv)?;
        if depth == 1 {
            tally_leaf(&applied.record, &mut total);
        } else {
            total.merge(perft_copy(&applied.game_state, depth - 1)?);
        }
    }
    Ok(total)
}

/// One worker thread per root move.
pub fn perft_multi_threaded(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth <= 1 {
        return perft(game_state, depth);
    }

    let mut handles = Vec::new();
    for mv in all_pseudo_legal_moves(game_state) {
        let mut child = *game_state;
        make_move(&mut child, &mv)?;
        handles.push(thread::spawn(move || perft(&child, depth - 1)));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let local = handle
            .join()
            .map_err(|_| ChessError::MoveGenerationFailed("perft worker thread panicked".to_owned()))??;
        total.merge(local);
    }

    Ok(total)
}

fn tally_leaf(record: &HistoryRecord, counts: &mut PerftCounts) {
    counts.nodes += 1;
    if record.is_capture() {
        counts.captures += 1;
    }
    if record.promotion.is_some() {
        counts.promotions += 1;
    }
}
