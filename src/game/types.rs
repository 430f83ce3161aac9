//! Core domain types for tic-tac-toe.

use super::moves::{Move, MoveError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// Classification of a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// The given player has three in a row.
    Won(Player),
    /// Board is full with no winner.
    Draw,
}

/// 3x3 tic-tac-toe board plus the player to move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
    /// Player whose mark the next move places.
    to_move: Player,
}

impl Board {
    /// Creates a new empty board with X to move.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
            to_move: Player::X,
        }
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns all squares as a slice, row-major.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Gets the square at the given coordinates, or `None` off the board.
    pub fn square(&self, row: usize, col: usize) -> Option<Square> {
        if row < 3 && col < 3 {
            Some(self.squares[row * 3 + col])
        } else {
            None
        }
    }

    /// Checks if the square at the given coordinates is empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.square(row, col), Some(Square::Empty))
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|&s| s != Square::Empty)
    }

    /// Directly sets a square, without turn bookkeeping.
    ///
    /// `apply` is the move-making path; this is a setup helper for
    /// constructing arbitrary positions.
    pub fn set(&mut self, row: usize, col: usize, square: Square) -> Result<(), MoveError> {
        if row > 2 || col > 2 {
            return Err(MoveError::OutOfBounds(Move::new(row, col)));
        }
        self.squares[row * 3 + col] = square;
        Ok(())
    }

    /// Applies a move for the player to move.
    ///
    /// Places the mover's mark on the target square and flips the turn
    /// to the opponent.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::OutOfBounds` when a coordinate exceeds 2, or
    /// `MoveError::SquareOccupied` when the target square is not empty.
    /// The board is unchanged on error.
    pub fn apply(&mut self, mv: Move) -> Result<(), MoveError> {
        let Some(square) = self.square(mv.row, mv.col) else {
            return Err(MoveError::OutOfBounds(mv));
        };
        if square != Square::Empty {
            return Err(MoveError::SquareOccupied(mv));
        }
        self.squares[mv.row * 3 + mv.col] = Square::Occupied(self.to_move);
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    /// Formats the board as a human-readable text grid.
    ///
    /// Occupied squares show their mark; empty squares show their cell
    /// digit (1-9), matching the keys that select them.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => out.push_str(&format!(" {} ", pos + 1)),
                    Square::Occupied(player) => out.push_str(&format!(" {player} ")),
                }
                if col < 2 {
                    out.push('|');
                }
            }
            if row < 2 {
                out.push_str("\n---+---+---\n");
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
