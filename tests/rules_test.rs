//! Tests for win and draw classification.

use tictactoe::{Board, Move, Outcome, Player, Square, classify};

/// Plays out a sequence of moves, alternating X and O from a fresh board.
fn play(moves: &[(usize, usize)]) -> Board {
    let mut board = Board::new();
    for &(row, col) in moves {
        board.apply(Move::new(row, col)).expect("Legal move");
    }
    board
}

/// Fills a board directly from a 3x3 character grid ('X', 'O', or ' ').
fn board_from_rows(rows: [[char; 3]; 3]) -> Board {
    let mut board = Board::new();
    for (row, cells) in rows.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            let square = match cell {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            };
            board.set(row, col, square).expect("In-bounds square");
        }
    }
    board
}

#[test]
fn test_fresh_board_in_progress() {
    assert_eq!(classify(&Board::new()), Outcome::InProgress);
}

#[test]
fn test_partial_board_in_progress() {
    let board = play(&[(1, 1), (0, 0), (2, 2)]);
    assert_eq!(classify(&board), Outcome::InProgress);
}

#[test]
fn test_row_win() {
    // X takes the top row.
    let board = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert_eq!(classify(&board), Outcome::Won(Player::X));
}

#[test]
fn test_column_win() {
    // O takes the left column.
    let board = play(&[(0, 1), (0, 0), (1, 2), (1, 0), (2, 2), (2, 0)]);
    assert_eq!(classify(&board), Outcome::Won(Player::O));
}

#[test]
fn test_main_diagonal_win() {
    let board = play(&[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
    assert_eq!(classify(&board), Outcome::Won(Player::X));
}

#[test]
fn test_anti_diagonal_win() {
    let board = play(&[(0, 2), (0, 0), (1, 1), (0, 1), (2, 0)]);
    assert_eq!(classify(&board), Outcome::Won(Player::X));
}

#[test]
fn test_full_board_no_line_is_draw() {
    let board = board_from_rows([
        ['X', 'O', 'X'],
        ['O', 'X', 'O'],
        ['O', 'X', 'O'],
    ]);
    assert_eq!(classify(&board), Outcome::Draw);
}

#[test]
fn test_win_on_full_board_beats_draw() {
    let board = board_from_rows([
        ['X', 'X', 'X'],
        ['O', 'O', 'X'],
        ['O', 'X', 'O'],
    ]);
    assert_eq!(classify(&board), Outcome::Won(Player::X));
}
