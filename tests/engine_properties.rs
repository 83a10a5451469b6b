use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use plum_board::engines::random_mover::choose_random_move;
use plum_board::game_state::chess_types::*;
use plum_board::move_generation::legal_move_apply::{apply_move, undo_last_move};
use plum_board::move_generation::legal_move_generator::{all_pseudo_legal_moves, legal_destinations};
use plum_board::session::game_session::{GameSession, SessionConfig};

const KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

fn sq(row: i32, col: i32) -> Square {
    Square::new(row, col).expect("test square should be on board")
}

fn arb_game_state() -> impl Strategy<Value = GameState> {
    (
        proptest::collection::vec((0u8..64, 0usize..6, any::<bool>()), 0..32),
        any::<bool>(),
    )
        .prop_map(|(placements, white_to_move)| {
            let mut board = Board::new_empty();
            for (index, kind, white) in placements {
                let color = if white { Color::White } else { Color::Black };
                if let Some(square) = Square::from_index(index) {
                    board.put(square, Piece::new(KINDS[kind], color));
                }
            }
            let side = if white_to_move { Color::White } else { Color::Black };
            GameState::from_board(board, side)
        })
}

/// Session after `plies` random moves from the start position.
fn random_session(seed: u64, plies: usize) -> GameSession {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut session = GameSession::new(SessionConfig::default());
    for _ in 0..plies {
        let Some(mv) = choose_random_move(session.game_state(), &mut rng) else {
            break;
        };
        session.commit_move(&mv).expect("generated move should validate");
    }
    session
}

proptest! {
    #[test]
    fn destinations_never_land_on_own_pieces(game in arb_game_state()) {
        for (from, piece) in game.board.pieces() {
            for dest in legal_destinations(&game, from) {
                let occupant = game.piece_at(dest.square);
                prop_assert!(occupant.map_or(true, |p| p.color != piece.color));
                prop_assert_eq!(dest.is_capture, occupant.is_some());
                prop_assert!(dest.square != from);
            }
        }
    }

    #[test]
    fn pawn_moves_onto_last_rows_always_queen(game in arb_game_state()) {
        for mv in all_pseudo_legal_moves(&game) {
            let mover = game.piece_at(mv.from).expect("moves start on occupied squares");
            let applied = apply_move(&game, &mv).expect("generated move should apply");
            let landed = applied.game_state.piece_at(mv.to).expect("destination occupied after move");

            if mover.kind == PieceKind::Pawn && (mv.to.row() == 0 || mv.to.row() == 7) {
                prop_assert_eq!(landed, Piece::new(PieceKind::Queen, mover.color));
                prop_assert!(applied.notation.ends_with("=Q"));
            } else {
                prop_assert_eq!(landed, mover);
                prop_assert!(!applied.notation.contains('='));
            }
        }
    }

    #[test]
    fn apply_then_undo_is_identity(game in arb_game_state()) {
        for mv in all_pseudo_legal_moves(&game) {
            let applied = apply_move(&game, &mv).expect("generated move should apply");
            let mut history = vec![applied.record];
            let restored = undo_last_move(&applied.game_state, &mut history);
            prop_assert_eq!(restored, Some(game));
            prop_assert!(history.is_empty());
        }
    }

    #[test]
    fn sliders_stop_at_first_occupied_square(game in arb_game_state()) {
        for (from, piece) in game.board.pieces() {
            let directions: &[(i8, i8)] = match piece.kind {
                PieceKind::Bishop => &[(-1, -1), (-1, 1), (1, -1), (1, 1)],
                PieceKind::Rook => &[(-1, 0), (1, 0), (0, -1), (0, 1)],
                PieceKind::Queen => &[(-1, -1), (-1, 1), (1, -1), (1, 1), (-1, 0), (1, 0), (0, -1), (0, 1)],
                _ => continue,
            };
            let dests = legal_destinations(&game, from);

            for &(d_row, d_col) in directions {
                let mut cursor = from.offset(d_row, d_col);
                let mut blocked = false;
                while let Some(square) = cursor {
                    let listed = dests.iter().any(|d| d.square == square);
                    match game.piece_at(square) {
                        _ if blocked => prop_assert!(!listed),
                        None => prop_assert!(listed),
                        Some(other) => {
                            prop_assert_eq!(listed, other.color != piece.color);
                            blocked = true;
                        }
                    }
                    cursor = square.offset(d_row, d_col);
                }
            }
        }
    }

    #[test]
    fn turn_alternates_and_full_undo_returns_to_start(seed in any::<u64>(), plies in 0usize..80) {
        let mut session = random_session(seed, plies);
        let played = session.history().len();
        let expected = if played % 2 == 0 { Color::White } else { Color::Black };
        prop_assert_eq!(session.side_to_move(), expected);
        prop_assert_eq!(session.move_list().len(), played);

        while session.undo().is_some() {}
        prop_assert_eq!(*session.game_state(), GameState::new_game());
        prop_assert!(session.move_list().is_empty());
    }
}

#[test]
fn scenario_e2_e4_from_start() {
    let game = GameState::new_game();
    let dest = legal_destinations(&game, sq(6, 4))
        .into_iter()
        .find(|d| d.square == sq(4, 4))
        .expect("e4 should be reachable");
    assert!(!dest.is_capture);

    let applied = apply_move(&game, &Move::new(sq(6, 4), sq(4, 4))).unwrap();
    assert_eq!(applied.notation, "e2-e4");
}

#[test]
fn scenario_knight_b1_targets() {
    let game = GameState::new_game();
    let dests = legal_destinations(&game, sq(7, 1));
    for target in [sq(5, 0), sq(5, 2)] {
        let dest = dests.iter().find(|d| d.square == target).expect("knight target missing");
        assert!(!dest.is_capture);
    }
}

#[test]
fn scenario_promotion_to_queen() {
    let game = GameState::new_empty().with_piece(sq(1, 3), Piece::new(PieceKind::Pawn, Color::White));
    let applied = apply_move(&game, &Move::new(sq(1, 3), sq(0, 3))).unwrap();

    assert_eq!(
        applied.game_state.piece_at(sq(0, 3)),
        Some(Piece::new(PieceKind::Queen, Color::White))
    );
    assert!(applied.notation.ends_with("=Q"));
}

#[test]
fn scenario_pawn_diagonal_capture() {
    let game = GameState::new_empty()
        .with_piece(sq(6, 4), Piece::new(PieceKind::Pawn, Color::White))
        .with_piece(sq(5, 3), Piece::new(PieceKind::Pawn, Color::Black));
    let dests = legal_destinations(&game, sq(6, 4));

    let capture = dests.iter().find(|d| d.square == sq(5, 3)).expect("d3 capture missing");
    assert!(capture.is_capture);
    assert!(dests.iter().any(|d| d.square == sq(5, 4) && !d.is_capture));
    assert!(dests.iter().any(|d| d.square == sq(4, 4) && !d.is_capture));
    assert_eq!(dests.len(), 3);
}

#[test]
fn scenario_undo_restores_destination_set() {
    let mut session = GameSession::default();
    for text in ["e2e4", "d7d5", "f1b5"] {
        session.commit_move_text(text).unwrap();
    }

    let from = sq(1, 2);
    let mut before: Vec<Destination> = session.legal_destinations(from);
    session.commit_move_text("c7c6").unwrap();
    session.undo().expect("c7-c6 should be undoable");
    let mut after = session.legal_destinations(from);

    before.sort_by_key(|d| d.square);
    after.sort_by_key(|d| d.square);
    assert_eq!(before, after);
}
