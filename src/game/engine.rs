//! The checkers rules engine
//!
//! [`Game`] owns the board, the side to move and the game status, and
//! drives everything through one click entry point: the same interface a
//! view layer forwards touches to and the move selector replays its picks
//! through. Click handling, hint life-cycle, promotion, scoring and win
//! detection all live here.

use std::fmt;

use tracing::{debug, info};

use crate::game::error::{ClickRejection, EngineError};
use crate::game::rules::board_state::Board;
use crate::game::rules::piece_moves;
use crate::game::types::{CellState, ClickOutcome, GameStatus, MoveKind, Piece, PieceRank, Side};

const MIN_BOARD_SIZE: i32 = 6;
const MAX_BOARD_SIZE: i32 = 32;

/// One checkers game: board, turn and status
///
/// Created once per game and replaced wholesale on a new game. Exclusively
/// owns its [`Board`]; the `&mut self` receivers make the single-writer
/// discipline of a UI event loop a compile-time property.
///
/// # Click protocol
///
/// [`Game::click`] resolves a `(col, row)` click against the current cell
/// state in this precedence:
///
/// 1. capture-landing hint - complete a jump
/// 2. reachable hint - complete a slide
/// 3. own unselected piece - select it and paint its hints
/// 4. own selected piece - deselect it and clear hints
/// 5. anything else - absorbed as a no-op
///
/// # Examples
///
/// ```rust,ignore
/// let mut game = Game::default();
/// game.handle_click(2, 5);            // select a Red man
/// let moved = game.handle_click(3, 4); // slide onto a painted hint
/// assert!(moved);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Game {
    board: Board,
    side_to_move: Side,
    status: GameStatus,
    red_start: u32,
    black_start: u32,
}

impl Default for Game {
    /// The standard 8x8 game
    fn default() -> Self {
        Game::with_board(Board::with_starting_layout(8))
    }
}

impl Game {
    /// Create a fresh game with the standard opening layout
    ///
    /// Red moves first. The per-side starting piece counts are derived from
    /// the layout that was actually placed, so scores stay correct on every
    /// supported board size.
    pub fn new(size: i32) -> Result<Game, EngineError> {
        Game::validate_size(size)?;
        Ok(Game::with_board(Board::with_starting_layout(size)))
    }

    /// Create a game with no pieces placed
    ///
    /// Position setup for tests and drivers: follow up with
    /// [`Game::place_piece`]. The game starts in progress with Red to move.
    pub fn empty(size: i32) -> Result<Game, EngineError> {
        Game::validate_size(size)?;
        Ok(Game::with_board(Board::new(size)))
    }

    fn validate_size(size: i32) -> Result<(), EngineError> {
        if size < MIN_BOARD_SIZE || size > MAX_BOARD_SIZE || size % 2 != 0 {
            return Err(EngineError::InvalidBoardSize { size });
        }
        Ok(())
    }

    fn with_board(board: Board) -> Game {
        let red_start = board.count_pieces(Side::Red);
        let black_start = board.count_pieces(Side::Black);
        Game {
            board,
            side_to_move: Side::Red,
            status: GameStatus::InProgress,
            red_start,
            black_start,
        }
    }

    /// Read access to the board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side length of the board
    pub fn size(&self) -> i32 {
        self.board.size()
    }

    /// The side whose pieces may currently be selected and moved
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Current game status
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Cell state at a coordinate, `Invalid` when out of range
    pub fn cell_at(&self, col: i32, row: i32) -> CellState {
        self.board.at(col, row)
    }

    /// Surviving pieces of one side currently on the board
    pub fn pieces_remaining(&self, side: Side) -> u32 {
        self.board.count_pieces(side)
    }

    /// Pieces a side has captured from its opponent
    ///
    /// Starting count of the opponent minus its survivors. A pure read:
    /// status transitions happen in the move path, never here.
    pub fn score_for(&self, side: Side) -> u32 {
        let opponent = side.opponent();
        self.starting_count(opponent)
            .saturating_sub(self.pieces_remaining(opponent))
    }

    fn starting_count(&self, side: Side) -> u32 {
        match side {
            Side::Red => self.red_start,
            Side::Black => self.black_start,
        }
    }

    /// Place a piece during position setup
    ///
    /// Replaces whatever the playable cell held and books the piece into
    /// its side's starting count so scores stay consistent. Returns false
    /// for unplayable or out-of-range cells.
    pub fn place_piece(&mut self, col: i32, row: i32, side: Side, rank: PieceRank) -> bool {
        if !self.board.in_range(col, row) || !Board::is_playable(col, row) {
            return false;
        }
        if let Some(previous) = self.board.piece_at(col, row) {
            self.unbook_piece(previous.side);
        }
        self.board
            .set(col, row, CellState::Occupied(Piece::new(side, rank)));
        match side {
            Side::Red => self.red_start += 1,
            Side::Black => self.black_start += 1,
        }
        true
    }

    /// Remove whatever a playable cell holds during position setup
    pub fn clear_cell(&mut self, col: i32, row: i32) -> bool {
        if !self.board.in_range(col, row) || !Board::is_playable(col, row) {
            return false;
        }
        if let Some(previous) = self.board.piece_at(col, row) {
            self.unbook_piece(previous.side);
        }
        self.board.set(col, row, CellState::Empty)
    }

    fn unbook_piece(&mut self, side: Side) {
        match side {
            Side::Red => self.red_start = self.red_start.saturating_sub(1),
            Side::Black => self.black_start = self.black_start.saturating_sub(1),
        }
    }

    /// Process one click, reporting what it did
    ///
    /// Every rejection leaves the board untouched; see the type-level docs
    /// for the precedence between cell states.
    pub fn click(&mut self, col: i32, row: i32) -> ClickOutcome {
        if self.status.is_over() {
            return ClickOutcome::Rejected(ClickRejection::GameOver);
        }
        if !self.board.in_range(col, row) {
            return ClickOutcome::Rejected(ClickRejection::OutOfRange { col, row });
        }

        match self.board.at(col, row) {
            CellState::CaptureLanding => self.complete_move(col, row, MoveKind::Capture),
            CellState::Reachable => self.complete_move(col, row, MoveKind::Simple),
            CellState::Occupied(piece) if piece.side == self.side_to_move => {
                if piece.selected {
                    piece_moves::clear_hints(&mut self.board);
                    ClickOutcome::Deselected
                } else {
                    piece_moves::clear_hints(&mut self.board);
                    self.board
                        .set(col, row, CellState::Occupied(piece.with_selected(true)));
                    piece_moves::paint_hints(&mut self.board, col, row);
                    ClickOutcome::Selected
                }
            }
            CellState::Occupied(_) => ClickOutcome::Rejected(ClickRejection::NotYourPiece { col, row }),
            CellState::Invalid => ClickOutcome::Rejected(ClickRejection::UnplayableCell { col, row }),
            CellState::Empty => ClickOutcome::Rejected(ClickRejection::EmptyCell { col, row }),
        }
    }

    /// Process one click, reporting only whether a full move completed
    ///
    /// The bare input contract: view layers that only need to know when to
    /// hand the turn over use this instead of [`Game::click`].
    pub fn handle_click(&mut self, col: i32, row: i32) -> bool {
        self.click(col, row).completed_move()
    }

    fn complete_move(&mut self, col: i32, row: i32, kind: MoveKind) -> ClickOutcome {
        let Some((from_col, from_row, piece)) = self.board.selected_piece() else {
            return ClickOutcome::Rejected(ClickRejection::NoSelection);
        };

        self.board.set(from_col, from_row, CellState::Empty);
        if kind == MoveKind::Capture {
            // hints land exactly two diagonal steps out, so the integer
            // midpoint is the jumped cell
            let jumped_col = (from_col + col) / 2;
            let jumped_row = (from_row + row) / 2;
            self.board.set(jumped_col, jumped_row, CellState::Empty);
        }

        let mut landed = piece.with_selected(false);
        if landed.rank == PieceRank::Man && row == landed.side.crowning_row(self.board.size()) {
            landed.rank = PieceRank::King;
            debug!(col, row, side = ?landed.side, "man crowned");
        }
        self.board.set(col, row, CellState::Occupied(landed));

        piece_moves::clear_hints(&mut self.board);
        self.side_to_move = self.side_to_move.opponent();
        self.check_game_over();

        debug!(
            ?kind,
            from = ?(from_col, from_row),
            to = ?(col, row),
            next = ?self.side_to_move,
            "move completed"
        );
        ClickOutcome::Moved(kind)
    }

    /// Transition to game over once a side has nothing left
    ///
    /// Runs once per completed move; `score_for` stays a pure read.
    fn check_game_over(&mut self) {
        if self.status.is_over() {
            return;
        }
        for side in [Side::Red, Side::Black] {
            if self.pieces_remaining(side) == 0 {
                let winner = side.opponent();
                self.status = GameStatus::Over { winner };
                info!(?winner, "game over");
                return;
            }
        }
    }
}

impl fmt::Display for Game {
    /// Text rendering of the grid, one symbol per cell
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.size() {
            write!(f, "{} ", col % 10)?;
        }
        writeln!(f)?;
        for row in 0..self.size() {
            write!(f, "{} ", row % 10)?;
            for col in 0..self.size() {
                write!(f, "{} ", self.cell_at(col, row).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
