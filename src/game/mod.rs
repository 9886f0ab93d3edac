//! Checkers game logic module
//!
//! Implements a complete checkers rules engine with a clean separation
//! between pure rules and the stateful engine that applies them.
//!
//! # Module Organization
//!
//! - `types` - Tagged state types (Side, PieceRank, Piece, CellState, ...)
//! - `rules` - Pure logic: board grid and movement geometry
//! - `engine` - The Game: click handling, promotion, scoring, win detection
//! - `ai` - Move selection behind the `MoveStrategy` trait
//! - `error` - Construction errors and the click-rejection taxonomy
//!
//! # Control Flow
//!
//! An input adapter resolves pointer input to a `(col, row)` pair and
//! forwards it to [`engine::Game::handle_click`]; when a human move
//! completes, the caller hands the opposing side to a
//! [`ai::MoveStrategy`], which replays its picks through the same click
//! interface. Rendering reads back through [`engine::Game::cell_at`].

pub mod ai;
pub mod engine;
pub mod error;
pub mod rules;
pub mod types;

// Re-export the main entry points
pub use engine::Game;
pub use types::{CellState, ClickOutcome, GameStatus, MoveKind, Piece, PieceRank, Side};
