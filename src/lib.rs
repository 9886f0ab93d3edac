pub mod game;

pub use game::ai::{MoveStrategy, RandomMover};
pub use game::error::{ClickRejection, EngineError};
pub use game::{CellState, ClickOutcome, Game, GameStatus, MoveKind, Piece, PieceRank, Side};
