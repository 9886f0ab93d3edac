//! Board state representation for move validation
//!
//! A square grid of cells in row-major order. Cells are mutated in place by
//! the engine; the grid itself lives for exactly one game.

use crate::game::types::{CellState, Piece, PieceRank, Side};

/// The checkers grid
///
/// Every position where `(col + row)` is even holds the fixed `Invalid`
/// marker; the dark squares carry the actual game state. All reads go
/// through [`Board::at`], which reports `Invalid` for out-of-range
/// coordinates instead of failing - adjacency checks near the edges rely
/// on that.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    size: i32,
    cells: Vec<CellState>,
}

impl Board {
    /// Create a board with every playable cell empty
    pub fn new(size: i32) -> Board {
        let mut cells = Vec::with_capacity((size * size) as usize);
        for row in 0..size {
            for col in 0..size {
                if Board::is_playable(col, row) {
                    cells.push(CellState::Empty);
                } else {
                    cells.push(CellState::Invalid);
                }
            }
        }
        Board { size, cells }
    }

    /// Create a board with the standard opening layout
    ///
    /// Playable cells with `row < 3` hold Black men and cells with `row > 4`
    /// hold Red men, the convention the game has always used. On the default
    /// 8x8 board that is twelve men per side with two empty rows between.
    pub fn with_starting_layout(size: i32) -> Board {
        let mut board = Board::new(size);
        for row in 0..size {
            for col in 0..size {
                if !Board::is_playable(col, row) {
                    continue;
                }
                if row < 3 {
                    board.set(col, row, CellState::Occupied(Piece::man(Side::Black)));
                } else if row > 4 {
                    board.set(col, row, CellState::Occupied(Piece::man(Side::Red)));
                }
            }
        }
        board
    }

    /// Side length of the grid
    pub fn size(&self) -> i32 {
        self.size
    }

    /// True when the coordinate lies on the board
    pub fn in_range(&self, col: i32, row: i32) -> bool {
        col >= 0 && col < self.size && row >= 0 && row < self.size
    }

    /// True for dark squares, the only ones pieces ever occupy
    pub fn is_playable(col: i32, row: i32) -> bool {
        (col + row) % 2 != 0
    }

    /// Cell state at a coordinate, `Invalid` when out of range
    pub fn at(&self, col: i32, row: i32) -> CellState {
        if self.in_range(col, row) {
            self.cells[(row * self.size + col) as usize]
        } else {
            CellState::Invalid
        }
    }

    /// Replace the cell state at an in-range coordinate
    ///
    /// Out-of-range writes are absorbed, mirroring the read side.
    pub(crate) fn set(&mut self, col: i32, row: i32, state: CellState) -> bool {
        if self.in_range(col, row) {
            self.cells[(row * self.size + col) as usize] = state;
            true
        } else {
            false
        }
    }

    /// True when the cell is playable and holds nothing (hints count as
    /// occupied here: a hinted cell is not a legal landing for another hint)
    pub fn is_empty(&self, col: i32, row: i32) -> bool {
        self.at(col, row) == CellState::Empty
    }

    /// The piece on a cell, if any, selection flag included
    pub fn piece_at(&self, col: i32, row: i32) -> Option<Piece> {
        self.at(col, row).piece()
    }

    /// The side owning the piece on a cell, if any
    pub fn side_at(&self, col: i32, row: i32) -> Option<Side> {
        self.piece_at(col, row).map(|piece| piece.side)
    }

    /// Locate the currently selected piece
    ///
    /// The engine maintains at most one selected piece at any time, so the
    /// first hit is the only one.
    pub fn selected_piece(&self) -> Option<(i32, i32, Piece)> {
        for row in 0..self.size {
            for col in 0..self.size {
                if let Some(piece) = self.piece_at(col, row) {
                    if piece.selected {
                        return Some((col, row, piece));
                    }
                }
            }
        }
        None
    }

    /// Count surviving pieces of one side
    pub fn count_pieces(&self, side: Side) -> u32 {
        let mut count = 0;
        for row in 0..self.size {
            for col in 0..self.size {
                if self.side_at(col, row) == Some(side) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Count surviving kings of one side
    pub fn count_kings(&self, side: Side) -> u32 {
        let mut count = 0;
        for row in 0..self.size {
            for col in 0..self.size {
                if let Some(piece) = self.piece_at(col, row) {
                    if piece.side == side && piece.rank == PieceRank::King {
                        count += 1;
                    }
                }
            }
        }
        count
    }
}
