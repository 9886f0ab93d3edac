//! Error types for game logic
//!
//! Provides custom error types for engine construction and the hardened
//! click-rejection taxonomy. Rejections are reported, never raised: every
//! invalid click is absorbed as a no-op with the reason attached.

/// Errors that can occur when constructing a game
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Unsupported board size
    #[error("invalid board size {size}: expected an even number between 6 and 32")]
    InvalidBoardSize { size: i32 },
}

/// Why a click was absorbed without changing the board
///
/// Every invalid click is a silent no-op; the variants name the reason so
/// callers that want to surface it can, while callers that only look at the
/// completed-move bool lose nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ClickRejection {
    /// Coordinate outside `[0, size)` on either axis
    #[error("coordinate ({col}, {row}) is outside the board")]
    OutOfRange { col: i32, row: i32 },

    /// The game has already been decided
    #[error("game is already over")]
    GameOver,

    /// Light square that never takes part in play
    #[error("cell ({col}, {row}) is not a playable square")]
    UnplayableCell { col: i32, row: i32 },

    /// Playable cell with nothing on it and no hint painted
    #[error("cell ({col}, {row}) is empty")]
    EmptyCell { col: i32, row: i32 },

    /// Piece belongs to the side that is not to move
    #[error("piece at ({col}, {row}) belongs to the opponent")]
    NotYourPiece { col: i32, row: i32 },

    /// Hint cell clicked while no piece is selected
    ///
    /// Unreachable through the public click interface (hints only exist
    /// while a piece is selected); kept so the invariant is checked, not
    /// assumed.
    #[error("no piece is currently selected")]
    NoSelection,
}
