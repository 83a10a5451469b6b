//! Errors used throughout the engine.
//!
//! `ChessError` is the single error type of the crate. Input problems
//! (`InvalidSquare`, `InvalidAlgebraic`) are recoverable and suitable for
//! showing to a user. Move problems (`NoPieceOnSquare`, `WrongSideToMove`,
//! `IllegalMove`) only surface when a caller asks for a move the current
//! position cannot support; which of them are checked depends on the
//! session's `MovePolicy`.
//!
//! Querying an empty square and undoing with no history are not errors.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, Square};

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Coordinates outside `0..=7`.
    InvalidSquare { row: i32, col: i32 },

    /// Coordinate or move text that could not be parsed.
    InvalidAlgebraic(String),

    /// A move was requested from a square holding no piece.
    NoPieceOnSquare(Square),

    /// The piece on `square` does not belong to the side to move.
    WrongSideToMove { square: Square, expected: Color },

    /// The destination is not reachable from `from`, or the requested
    /// promotion is not the automatic queen.
    IllegalMove { from: Square, to: Square },

    /// A perft worker failed; payload carries the diagnostic.
    MoveGenerationFailed(String),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::InvalidSquare { row, col } => {
                write!(f, "square ({row}, {col}) is off the board")
            }
            ChessError::InvalidAlgebraic(text) => write!(f, "invalid algebraic text: {text}"),
            ChessError::NoPieceOnSquare(square) => write!(f, "no piece on {square}"),
            ChessError::WrongSideToMove { square, expected } => {
                write!(f, "piece on {square} does not belong to {expected}")
            }
            ChessError::IllegalMove { from, to } => write!(f, "illegal move {from} -> {to}"),
            ChessError::MoveGenerationFailed(msg) => write!(f, "move generation failed: {msg}"),
        }
    }
}

impl Error for ChessError {}
