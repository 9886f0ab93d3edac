//! Computer opponent for the checkers engine
//!
//! The opponent drives the same click interface a human uses: one click to
//! select a piece, one click on a painted hint to move it. Keeping the AI
//! behind [`MoveStrategy`] means a stronger engine can be substituted
//! without touching the rules engine.

use crate::game::engine::Game;
use crate::game::types::Side;

pub mod random;

pub use random::{hinted_destinations, movable_pieces, RandomMover};

/// A pluggable move picker
///
/// Implementations receive the whole game and the side they play for, and
/// act by issuing clicks through the engine so every move they make passes
/// the same legality logic as human input.
pub trait MoveStrategy {
    /// Attempt one full move for `side`
    ///
    /// Returns true when a move completed. A side with nothing to play
    /// returns false without touching the board; the strategy never
    /// escalates that to game over.
    fn play_turn(&mut self, game: &mut Game, side: Side) -> bool;
}
