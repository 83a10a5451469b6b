//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and the demo
//! binary. Orientation only changes the drawing; the engine's row layout is
//! unaffected.

use crate::game_state::chess_types::*;

/// Which side is drawn at the bottom of the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    WhiteBottom,
    BlackBottom,
}

impl Orientation {
    #[inline]
    pub const fn flipped(self) -> Self {
        match self {
            Orientation::WhiteBottom => Orientation::BlackBottom,
            Orientation::BlackBottom => Orientation::WhiteBottom,
        }
    }
}

/// Render the board to a Unicode string for terminal output.
///
/// Squares of `last_move` are bracketed so the most recent move stands out.
pub fn render_game_state(
    game_state: &GameState,
    orientation: Orientation,
    last_move: Option<(Square, Square)>,
) -> String {
    let (rows, cols): (Vec<u8>, Vec<u8>) = match orientation {
        Orientation::WhiteBottom => ((0..8).collect(), (0..8).collect()),
        Orientation::BlackBottom => ((0..8).rev().collect(), (0..8).rev().collect()),
    };

    let files: String = cols
        .iter()
        .map(|&col| format!(" {} ", char::from(b'a' + col)))
        .collect();
    let header = format!("  {files}\n");

    let mut out = header.clone();
    for &row in &rows {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for &col in &cols {
            let Some(square) = Square::from_index(row * 8 + col) else {
                continue;
            };
            let glyph = game_state
                .piece_at(square)
                .map(piece_to_unicode)
                .unwrap_or('·');
            let marked = last_move.is_some_and(|(from, to)| square == from || square == to);
            if marked {
                out.push('[');
                out.push(glyph);
                out.push(']');
            } else {
                out.push(' ');
                out.push(glyph);
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }
    out.push_str(header.trim_end_matches('\n'));

    out
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
