//! Type definitions and utilities for checkers game logic
//!
//! Provides tagged variant types for checkers-specific state to improve
//! type safety and code clarity. Cell occupancy (empty / piece), piece
//! attributes (side, rank) and transient UI state (selected, hinted) are
//! kept as orthogonal fields instead of one flat enumeration.

use crate::game::error::ClickRejection;

/// The two players of a checkers game
///
/// Red sits at the bottom of the board (rows `size-3..size`) and moves
/// towards row 0; Black sits at the top (rows `0..3`) and moves towards
/// row `size-1`. Red always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Red,
    Black,
}

impl Side {
    /// Get the opposing side
    pub fn opponent(self) -> Side {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }

    /// Row delta in which this side's men advance
    ///
    /// Black men advance towards higher rows, Red men towards lower rows.
    pub fn forward(self) -> i32 {
        match self {
            Side::Red => -1,
            Side::Black => 1,
        }
    }

    /// The far-edge row on which a man of this side is crowned
    pub fn crowning_row(self, size: i32) -> i32 {
        match self {
            Side::Red => 0,
            Side::Black => size - 1,
        }
    }
}

/// Rank of a checker piece
///
/// A `Man` slides diagonally forward only; a `King` (the "super checker")
/// slides diagonally in all four directions. Jumps are rank-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceRank {
    Man,
    King,
}

/// A checker piece occupying one playable cell
///
/// `selected` is transient UI state: at most one piece on the board is
/// selected at any time, and only between a selection click and the next
/// completed move or deselection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub side: Side,
    pub rank: PieceRank,
    pub selected: bool,
}

impl Piece {
    /// Create an unselected piece
    pub fn new(side: Side, rank: PieceRank) -> Self {
        Piece {
            side,
            rank,
            selected: false,
        }
    }

    /// Create an unselected man
    pub fn man(side: Side) -> Self {
        Piece::new(side, PieceRank::Man)
    }

    /// Create an unselected king
    pub fn king(side: Side) -> Self {
        Piece::new(side, PieceRank::King)
    }

    /// Copy of this piece with the selection flag replaced
    pub fn with_selected(self, selected: bool) -> Self {
        Piece { selected, ..self }
    }
}

/// State of one board position
///
/// Positions where `(col + row)` is even are never playable and stay
/// `Invalid` for the lifetime of the board. Playable positions hold one of
/// the remaining variants; `Reachable` and `CaptureLanding` are transient
/// hint markers painted around the currently selected piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Unplayable light square (also reported for out-of-range reads)
    Invalid,
    /// Playable dark square with nothing on it
    Empty,
    /// Empty cell the selected piece may slide to
    Reachable,
    /// Empty cell the selected piece may jump to, capturing the piece between
    CaptureLanding,
    /// Cell holding a checker piece
    Occupied(Piece),
}

impl CellState {
    /// The piece on this cell, if any
    pub fn piece(self) -> Option<Piece> {
        match self {
            CellState::Occupied(piece) => Some(piece),
            _ => None,
        }
    }

    /// True for the transient destination markers
    pub fn is_hint(self) -> bool {
        matches!(self, CellState::Reachable | CellState::CaptureLanding)
    }

    /// Single-character symbol used by the text renderer
    ///
    /// Men are lowercase, kings uppercase; hints render as `+` (slide) and
    /// `x` (capture landing).
    pub fn symbol(self) -> char {
        match self {
            CellState::Invalid => '.',
            CellState::Empty => '_',
            CellState::Reachable => '+',
            CellState::CaptureLanding => 'x',
            CellState::Occupied(Piece {
                side: Side::Red,
                rank: PieceRank::Man,
                ..
            }) => 'r',
            CellState::Occupied(Piece {
                side: Side::Red,
                rank: PieceRank::King,
                ..
            }) => 'R',
            CellState::Occupied(Piece {
                side: Side::Black,
                rank: PieceRank::Man,
                ..
            }) => 'b',
            CellState::Occupied(Piece {
                side: Side::Black,
                rank: PieceRank::King,
                ..
            }) => 'B',
        }
    }
}

/// Kind of a completed move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// Diagonal slide to an adjacent empty cell
    Simple,
    /// Jump over an opposing piece, removing it
    Capture,
}

/// Result of one click delivered to the engine
///
/// Input adapters that only need the "move completed" bool can stick to
/// `Game::handle_click`; this enum additionally names why a click was
/// absorbed. Rejected clicks mutate nothing either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A full move (slide or capture) completed on this click
    Moved(MoveKind),
    /// A piece of the side to move was selected and its hints painted
    Selected,
    /// The already-selected piece was deselected and hints cleared
    Deselected,
    /// The click was absorbed without touching the board
    Rejected(ClickRejection),
}

impl ClickOutcome {
    /// True when this click finished a move and flipped the side to move
    pub fn completed_move(self) -> bool {
        matches!(self, ClickOutcome::Moved(_))
    }
}

/// Whether the game is still being played
///
/// Transitions to `Over` exactly when one side captures the opponent's last
/// piece; all clicks are absorbed afterwards until a new game is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Over { winner: Side },
}

impl GameStatus {
    /// Check if the game has ended
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Get the winning side, if the game has ended
    pub fn winner(self) -> Option<Side> {
        match self {
            GameStatus::Over { winner } => Some(winner),
            GameStatus::InProgress => None,
        }
    }
}
