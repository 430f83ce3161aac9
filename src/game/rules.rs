//! Win and draw classification.

use super::types::{Board, Outcome, Square};

/// The eight winning lines as board indices, in scan order:
/// rows, then columns, then the two diagonals.
#[rustfmt::skip]
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Classifies a board as in progress, won, or drawn.
///
/// Lines are checked in a fixed order (rows, then columns, then the
/// diagonals); the first line found fully occupied by one player decides
/// the winner. A full board with no winning line is a draw. Total over
/// any well-formed board.
pub fn classify(board: &Board) -> Outcome {
    let squares = board.squares();

    for [a, b, c] in LINES {
        if let Square::Occupied(player) = squares[a] {
            if squares[b] == squares[a] && squares[c] == squares[a] {
                return Outcome::Won(player);
            }
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
