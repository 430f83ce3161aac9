//! First-class move type, validation errors, and move generation.

use super::types::Board;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A move in tic-tac-toe: the player to move placing their mark at
/// (row, col).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row index, 0-2 top to bottom.
    pub row: usize,
    /// Column index, 0-2 left to right.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a move from a row-major board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        if index < 9 {
            Some(Self::new(index / 3, index % 3))
        } else {
            None
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// A coordinate lies outside the 3x3 grid.
    #[display("position {} is off the board", _0)]
    OutOfBounds(Move),

    /// The square at the position is already occupied.
    #[display("square {} is already occupied", _0)]
    SquareOccupied(Move),
}

impl std::error::Error for MoveError {}

/// Enumerates every move available to the player to move.
///
/// Squares are scanned in row-major order (row 0-2, column 0-2), so the
/// result order is deterministic. Each entry pairs the board that results
/// from the move (mark placed, turn flipped) with the move itself.
///
/// Already-decided positions are not filtered out; callers decide when to
/// stop with [`classify`](super::classify). A full board yields an empty
/// vec.
pub fn possible_moves(board: &Board) -> Vec<(Board, Move)> {
    let mut moves = Vec::new();
    for row in 0..3 {
        for col in 0..3 {
            let mv = Move::new(row, col);
            let mut child = board.clone();
            if child.apply(mv).is_ok() {
                moves.push((child, mv));
            }
        }
    }
    moves
}
