//! Random-move opponent.
//!
//! Picks uniformly among the pseudo-legal moves of the side to move. Handy as
//! a stand-in second player and for driving long random games in tests.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::all_pseudo_legal_moves;

/// Random move for the side to move, or `None` if it has no pieces that can move.
pub fn choose_random_move<R: Rng + ?Sized>(game_state: &GameState, rng: &mut R) -> Option<Move> {
    all_pseudo_legal_moves(game_state).as_slice().choose(rng).copied()
}

/// Thread-local RNG variant for interactive use.
pub fn random_move(game_state: &GameState) -> Option<Move> {
    let mut rng = rand::rng();
    choose_random_move(game_state, &mut rng)
}
