//! Uniform-random move selection
//!
//! Deliberately a weak baseline opponent: pick a movable piece uniformly at
//! random, then pick one of its painted destinations uniformly at random.
//! Both enumerations reuse the engine's own destination geometry, so a
//! piece reported movable always produces at least one hint once selected.

use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use rand::Rng;

use super::MoveStrategy;
use crate::game::engine::Game;
use crate::game::rules::piece_moves;
use crate::game::types::Side;

/// Every piece of `side` that has at least one legal slide or jump
///
/// A pure query over the current board; neither the side to move nor the
/// game status is consulted.
pub fn movable_pieces(game: &Game, side: Side) -> Vec<(i32, i32)> {
    let board = game.board();
    let mut result = Vec::new();
    for row in 0..board.size() {
        for col in 0..board.size() {
            if board.side_at(col, row) == Some(side) && piece_moves::can_move(board, col, row) {
                result.push((col, row));
            }
        }
    }
    result
}

/// Every cell currently painted as a slide or capture destination
///
/// The engine keeps at most one piece selected, so all markers on the board
/// belong to that piece.
pub fn hinted_destinations(game: &Game) -> Vec<(i32, i32)> {
    let board = game.board();
    let mut result = Vec::new();
    for row in 0..board.size() {
        for col in 0..board.size() {
            if board.at(col, row).is_hint() {
                result.push((col, row));
            }
        }
    }
    result
}

/// The uniform-random opponent
///
/// Owns its RNG so seeded runs replay identically. [`RandomMover::new`]
/// draws from the thread RNG; tests and the self-play driver inject a
/// seeded [`rand::rngs::StdRng`] through [`RandomMover::with_rng`].
#[derive(Debug)]
pub struct RandomMover<R: Rng = ThreadRng> {
    rng: R,
}

impl RandomMover<ThreadRng> {
    /// A mover backed by the thread-local RNG
    pub fn new() -> Self {
        RandomMover { rng: rand::rng() }
    }
}

impl Default for RandomMover<ThreadRng> {
    fn default() -> Self {
        RandomMover::new()
    }
}

impl<R: Rng> RandomMover<R> {
    /// A mover backed by the given RNG
    pub fn with_rng(rng: R) -> Self {
        RandomMover { rng }
    }
}

impl<R: Rng> MoveStrategy for RandomMover<R> {
    fn play_turn(&mut self, game: &mut Game, side: Side) -> bool {
        let pieces = movable_pieces(game, side);
        let Some(&(col, row)) = pieces.choose(&mut self.rng) else {
            return false;
        };
        game.handle_click(col, row);

        let hints = hinted_destinations(game);
        let Some(&(dest_col, dest_row)) = hints.choose(&mut self.rng) else {
            // a movable piece always paints hints; guarded anyway so a
            // mismatch surfaces as a skipped turn instead of a panic
            return false;
        };
        game.handle_click(dest_col, dest_row)
    }
}
