//! Crate root module declarations for the Plum Board session engine.
//!
//! Exposes the board/state model, pseudo-legal destination generation,
//! move application with undo, the single-owner game session, and text
//! helpers (notation, rendering) so binaries, tests, and host UIs can import
//! stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod history_record;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod session {
    pub mod game_session;
}

pub mod engines {
    pub mod random_mover;
}

pub mod utils {
    pub mod algebraic;
    pub mod move_notation;
    pub mod render_game_state;
}
