//! Seeded random game between two random movers, then rewound with undo.
//!
//! Run with:
//! `cargo run --release --bin random_playout`
//! `cargo run --release --bin random_playout -- --plies 60 --seed 7 --flip`

use rand::{rngs::StdRng, SeedableRng};

use plum_board::engines::random_mover::choose_random_move;
use plum_board::game_state::chess_types::GameState;
use plum_board::session::game_session::{GameSession, SessionConfig};
use plum_board::utils::render_game_state::{render_game_state, Orientation};

fn arg_value(args: &[String], name: &str, default: u64) -> Result<u64, String> {
    match args.iter().position(|a| a == name) {
        Some(i) => args
            .get(i + 1)
            .ok_or_else(|| format!("{name} needs a value"))?
            .parse::<u64>()
            .map_err(|e| format!("{name}: {e}")),
        None => Ok(default),
    }
}

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().collect();
    let plies = arg_value(&args, "--plies", 40)?;
    let seed = arg_value(&args, "--seed", 1234)?;
    let orientation = if args.iter().any(|a| a == "--flip") {
        Orientation::BlackBottom
    } else {
        Orientation::WhiteBottom
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let mut session = GameSession::new(SessionConfig::default());

    for _ in 0..plies {
        let Some(mv) = choose_random_move(session.game_state(), &mut rng) else {
            println!("{} has no moves left", session.side_to_move());
            break;
        };
        session.commit_move(&mv).map_err(|e| e.to_string())?;
    }

    println!(
        "{}",
        render_game_state(session.game_state(), orientation, session.last_move())
    );
    println!("{}", session.status_line());
    for line in session.formatted_move_list() {
        println!("{line}");
    }

    let played = session.history().len();
    while session.undo().is_some() {}
    let rewound = *session.game_state() == GameState::new_game();
    println!("undid {played} plies, back at start: {rewound}");

    Ok(())
}
