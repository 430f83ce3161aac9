//! Tic-tac-toe library - game core and terminal client
//!
//! # Architecture
//!
//! - **Game**: pure game logic - board model, move generation,
//!   win/draw classification, and an exhaustive minimax search
//! - **Tui**: terminal client that renders the board and orchestrates
//!   turns between human and computer players
//!
//! # Example
//!
//! ```
//! use tictactoe::{best_move, Board};
//!
//! let board = Board::new();
//! let (score, mv) = best_move(&board);
//! assert_eq!(score, 0); // perfect play from an empty board is a draw
//! assert!(mv.is_some());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game;
mod tui;

// Crate-level exports - game core
pub use game::{
    Board, Mark, Move, MoveError, Outcome, Player, Square, best_move, classify, possible_moves,
};

// Crate-level exports - terminal client
pub use tui::{GameMode, run_tui};
