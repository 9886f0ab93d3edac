//! Checkers piece movement rules
//!
//! Contains the destination geometry for men and kings plus the hint
//! painting and clearing the engine applies around a selected piece.
//! Pure functions with no side effects beyond the passed board - easy to
//! test, and shared verbatim by the move selector so engine hints and
//! selector legality can never disagree.

use super::board_state::Board;
use crate::game::types::{CellState, PieceRank};

/// Legal destinations for one piece, slides and jump landings kept apart
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Destinations {
    /// Adjacent empty cells the piece may slide to
    pub slides: Vec<(i32, i32)>,
    /// Empty cells two diagonal steps away with an opposing piece between
    pub jumps: Vec<(i32, i32)>,
}

impl Destinations {
    /// True when the piece has no legal move at all
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty() && self.jumps.is_empty()
    }
}

/// Compute all legal destinations for the piece at (col, row)
///
/// A man slides to its two forward diagonals only; a king slides to all
/// four. Jumps ignore rank: any diagonal neighbour holding an opposing
/// piece with an empty in-range cell directly behind it is a capture
/// landing, backward jumps for men included. Returns empty destinations
/// when the cell holds no piece.
pub fn destinations(board: &Board, col: i32, row: i32) -> Destinations {
    let mut result = Destinations::default();
    let Some(piece) = board.piece_at(col, row) else {
        return result;
    };

    let forward = piece.side.forward();
    let slide_rows: &[i32] = match piece.rank {
        PieceRank::Man => &[forward],
        PieceRank::King => &[forward, -forward],
    };
    for &dr in slide_rows {
        for dc in [-1, 1] {
            if board.is_empty(col + dc, row + dr) {
                result.slides.push((col + dc, row + dr));
            }
        }
    }

    for dr in [-1, 1] {
        for dc in [-1, 1] {
            let jumped = board.side_at(col + dc, row + dr);
            if jumped == Some(piece.side.opponent()) && board.is_empty(col + 2 * dc, row + 2 * dr) {
                result.jumps.push((col + 2 * dc, row + 2 * dr));
            }
        }
    }

    result
}

/// True when the piece at (col, row) has at least one slide or jump
pub fn can_move(board: &Board, col: i32, row: i32) -> bool {
    !destinations(board, col, row).is_empty()
}

/// Paint hint markers for every destination of the piece at (col, row)
///
/// Slides become `Reachable`, jump landings become `CaptureLanding`. Both
/// kinds may coexist around one piece: captures are never mandatory.
pub fn paint_hints(board: &mut Board, col: i32, row: i32) {
    let found = destinations(board, col, row);
    for (dest_col, dest_row) in found.slides {
        board.set(dest_col, dest_row, CellState::Reachable);
    }
    for (dest_col, dest_row) in found.jumps {
        board.set(dest_col, dest_row, CellState::CaptureLanding);
    }
}

/// Restore every transient marker on the board
///
/// Hint cells go back to empty and the selected piece, if any, back to its
/// unselected equivalent. Only playable cells can carry transient state, so
/// only those are scanned.
pub fn clear_hints(board: &mut Board) {
    for row in 0..board.size() {
        for col in 0..board.size() {
            if !Board::is_playable(col, row) {
                continue;
            }
            match board.at(col, row) {
                CellState::Reachable | CellState::CaptureLanding => {
                    board.set(col, row, CellState::Empty);
                }
                CellState::Occupied(piece) if piece.selected => {
                    board.set(col, row, CellState::Occupied(piece.with_selected(false)));
                }
                _ => {}
            }
        }
    }
}
