//! Display notation for committed moves.
//!
//! Moves are written as `<from><x|-><to>[=Q]`, e.g. `e2-e4`, `d4xe5`,
//! `e7-e8=Q`. The parser also accepts the compact `e2e4` form so typed input
//! can be turned into a `Move`.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

/// Notation for a committed move, derived from its history record.
pub fn move_notation(record: &HistoryRecord) -> String {
    let separator = if record.is_capture() { 'x' } else { '-' };
    let mut out = format!("{}{}{}", record.from, separator, record.to);
    if let Some(kind) = record.promotion {
        out.push('=');
        out.push(kind.letter());
    }
    out
}

/// Parse `e2e4`, `e2-e4`, `e2xe4`, optionally followed by `=Q` or `q`.
///
/// The capture marker is informational only; the board decides whether a
/// move captures.
pub fn parse_move_text(text: &str) -> ChessResult<Move> {
    let invalid = || ChessError::InvalidAlgebraic(text.to_owned());
    let trimmed = text.trim();
    if !trimmed.is_ascii() || trimmed.len() < 4 {
        return Err(invalid());
    }

    let from = algebraic_to_square(&trimmed[0..2])?;
    let mut rest = &trimmed[2..];
    if let Some(stripped) = rest.strip_prefix(['-', 'x', 'X']) {
        rest = stripped;
    }
    if rest.len() < 2 {
        return Err(invalid());
    }
    let to = algebraic_to_square(&rest[0..2])?;

    let tail = &rest[2..];
    let promotion = match tail.strip_prefix('=').unwrap_or(tail) {
        "" if tail.is_empty() => None,
        letter if letter.len() == 1 => {
            let ch = letter.chars().next().ok_or_else(invalid)?;
            Some(PieceKind::from_letter(ch).ok_or_else(invalid)?)
        }
        _ => return Err(invalid()),
    };

    Ok(Move {
        from,
        to,
        promotion,
    })
}

/// Pair up notations as numbered full moves: `["1. e2-e4 e7-e5", "2. g1-f3"]`.
pub fn format_move_list(notations: &[String]) -> Vec<String> {
    notations
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| match pair {
            [white, black] => format!("{}. {} {}", i + 1, white, black),
            [white] => format!("{}. {}", i + 1, white),
            _ => String::new(),
        })
        .collect()
}
