//! Headless self-play driver for the checkers engine
//!
//! Runs random-vs-random games through the same click interface a UI would
//! use. Handy for exercising the engine end to end and for reproducing
//! games from a seed.

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use xfcheckers::game::ai::{MoveStrategy, RandomMover};
use xfcheckers::game::engine::Game;

#[derive(Parser, Debug)]
#[command(name = "xfcheckers", about = "Checkers engine self-play driver")]
struct Args {
    /// Board size (even, between 6 and 32)
    #[arg(long, default_value_t = 8)]
    size: i32,

    /// RNG seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many completed moves
    #[arg(long, default_value_t = 500)]
    max_moves: u32,

    /// Print the board after every completed move
    #[arg(long)]
    show_board: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut game = Game::new(args.size)?;
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut mover = RandomMover::with_rng(rng);

    info!(size = args.size, seed = ?args.seed, "starting self-play");
    println!("{game}");

    let mut moves_played = 0;
    while moves_played < args.max_moves && !game.status().is_over() {
        let side = game.side_to_move();
        if !mover.play_turn(&mut game, side) {
            info!(?side, "no legal moves left, stopping");
            break;
        }
        moves_played += 1;
        if args.show_board {
            println!("{game}");
        }
    }

    println!("{game}");
    println!(
        "moves: {}  red {} - {} black  status: {:?}",
        moves_played,
        game.score_for(xfcheckers::Side::Red),
        game.score_for(xfcheckers::Side::Black),
        game.status()
    );
    Ok(())
}
