//! Single-owner game session: current state, undo history, and move list.
//!
//! A session is the only writer of its state. Hosts that share one across
//! threads must serialize access themselves; nothing here locks.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_checked_move, apply_move, unmake_move};
use crate::move_generation::legal_move_generator::legal_destinations;
use crate::utils::move_notation::{format_move_list, parse_move_text};

/// How `commit_move` treats moves handed in by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MovePolicy {
    /// Reject moves outside the generated destinations.
    #[default]
    Validate,
    /// Apply whatever the caller passes, as long as a piece stands on `from`.
    Trust,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub move_policy: MovePolicy,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    game_state: GameState,
    history: Vec<HistoryRecord>,
    notation: Vec<String>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            game_state: GameState::new_game(),
            history: Vec::new(),
            notation: Vec::new(),
        }
    }

    /// Start from an arbitrary position with empty history.
    pub fn from_game_state(config: SessionConfig, game_state: GameState) -> Self {
        Self {
            config,
            game_state,
            history: Vec::new(),
            notation: Vec::new(),
        }
    }

    /// Back to the opening position, White to move, nothing to undo.
    pub fn new_game(&mut self) {
        self.game_state = GameState::new_game();
        self.history.clear();
        self.notation.clear();
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[inline]
    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.game_state.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.game_state.side_to_move
    }

    #[inline]
    pub fn history(&self) -> &[HistoryRecord] {
        &self.history
    }

    /// Notation of every committed move, oldest first.
    #[inline]
    pub fn move_list(&self) -> &[String] {
        &self.notation
    }

    pub fn formatted_move_list(&self) -> Vec<String> {
        format_move_list(&self.notation)
    }

    /// Squares touched by the most recent move, for highlighting.
    pub fn last_move(&self) -> Option<(Square, Square)> {
        self.history.last().map(|record| (record.from, record.to))
    }

    pub fn status_line(&self) -> String {
        format!("Turn: {}", self.game_state.side_to_move)
    }

    pub fn legal_destinations(&self, square: Square) -> Vec<Destination> {
        legal_destinations(&self.game_state, square)
    }

    /// Apply `mv` under the configured policy and return its notation.
    pub fn commit_move(&mut self, mv: &Move) -> ChessResult<&str> {
        let applied = match self.config.move_policy {
            MovePolicy::Validate => apply_checked_move(&self.game_state, mv)?,
            MovePolicy::Trust => apply_move(&self.game_state, mv)?,
        };

        self.game_state = applied.game_state;
        self.history.push(applied.record);
        self.notation.push(applied.notation);
        Ok(self.notation.last().map(String::as_str).unwrap_or_default())
    }

    /// Parse typed input such as `e2-e4` and commit it.
    pub fn commit_move_text(&mut self, text: &str) -> ChessResult<&str> {
        let mv = parse_move_text(text)?;
        self.commit_move(&mv)
    }

    /// Take back the newest move. Returns the reversed record, or `None` when there is no history.
    pub fn undo(&mut self) -> Option<HistoryRecord> {
        let record = self.history.pop()?;
        unmake_move(&mut self.game_state, &record);
        self.notation.pop();
        Some(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_errors::ChessError;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn fresh_session_is_white_to_move_with_no_history() {
        let session = GameSession::default();
        assert_eq!(session.side_to_move(), Color::White);
        assert!(session.history().is_empty());
        assert!(session.move_list().is_empty());
        assert_eq!(session.last_move(), None);
        assert_eq!(session.status_line(), "Turn: White");
    }

    #[test]
    fn commit_and_undo_keep_lists_in_lockstep() {
        let mut session = GameSession::default();
        assert_eq!(session.commit_move_text("e2-e4"), Ok("e2-e4"));
        assert_eq!(session.commit_move_text("d7d5"), Ok("d7-d5"));
        assert_eq!(session.commit_move_text("e4xd5"), Ok("e4xd5"));

        assert_eq!(session.history().len(), 3);
        assert_eq!(session.formatted_move_list(), vec!["1. e2-e4 d7-d5", "2. e4xd5"]);
        assert_eq!(session.last_move(), Some((sq(4, 4), sq(3, 3))));
        assert_eq!(session.side_to_move(), Color::Black);

        let undone = session.undo().expect("capture should be undoable");
        assert_eq!(
            undone.captured_piece,
            Some(Piece::new(PieceKind::Pawn, Color::Black))
        );
        assert_eq!(session.move_list(), ["e2-e4".to_owned(), "d7-d5".to_owned()]);
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.side_to_move(), Color::White);
    }

    #[test]
    fn undo_everything_then_once_more_is_harmless() {
        let mut session = GameSession::default();
        session.commit_move_text("g1f3").unwrap();
        session.commit_move_text("g8f6").unwrap();

        assert!(session.undo().is_some());
        assert!(session.undo().is_some());
        assert!(session.undo().is_none());
        assert_eq!(*session.game_state(), GameState::new_game());
    }

    #[test]
    fn validating_session_rejects_out_of_turn_moves() {
        let mut session = GameSession::default();
        assert_eq!(
            session.commit_move_text("e7e5"),
            Err(ChessError::WrongSideToMove { square: sq(1, 4), expected: Color::White })
        );
        assert!(session.history().is_empty());
    }

    #[test]
    fn trusting_session_applies_what_it_is_given() {
        let mut session = GameSession::new(SessionConfig {
            move_policy: MovePolicy::Trust,
        });
        assert_eq!(session.commit_move_text("e7e5"), Ok("e7-e5"));
        assert_eq!(session.side_to_move(), Color::Black);
        assert_eq!(
            session.commit_move_text("e4e5"),
            Err(ChessError::NoPieceOnSquare(sq(4, 4)))
        );
    }

    #[test]
    fn new_game_resets_everything() {
        let mut session = GameSession::default();
        session.commit_move_text("e2e4").unwrap();
        session.new_game();

        assert_eq!(*session.game_state(), GameState::new_game());
        assert!(session.history().is_empty());
        assert!(session.move_list().is_empty());
    }

    #[test]
    fn session_from_custom_position_promotes() {
        let game = GameState::new_empty()
            .with_piece(sq(1, 3), Piece::new(PieceKind::Pawn, Color::White))
            .with_piece(sq(7, 4), Piece::new(PieceKind::King, Color::White))
            .with_piece(sq(0, 7), Piece::new(PieceKind::King, Color::Black));
        let mut session = GameSession::from_game_state(SessionConfig::default(), game);

        let dests = session.legal_destinations(sq(1, 3));
        assert_eq!(dests.len(), 1);
        assert!(dests[0].promotes);

        let notation = session
            .commit_move(&Move::from_destination(sq(1, 3), &dests[0]))
            .unwrap()
            .to_owned();
        assert!(notation.ends_with("=Q"));
        assert_eq!(
            session.board().piece_at(sq(0, 3)),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );
    }
}
