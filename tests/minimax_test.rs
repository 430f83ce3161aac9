//! Tests for the minimax search.

use tictactoe::{Board, Move, Outcome, Player, Square, best_move, classify};

/// Plays out a sequence of moves, alternating X and O from a fresh board.
fn play(moves: &[(usize, usize)]) -> Board {
    let mut board = Board::new();
    for &(row, col) in moves {
        board.apply(Move::new(row, col)).expect("Legal move");
    }
    board
}

#[test]
fn test_fresh_game_is_forced_draw() {
    let (score, mv) = best_move(&Board::new());
    assert_eq!(score, 0);
    assert!(mv.is_some());
}

#[test]
fn test_takes_immediate_win_for_x() {
    // X X .
    // . . .
    // O O .
    let board = play(&[(0, 0), (2, 0), (0, 1), (2, 1)]);
    assert_eq!(board.to_move(), Player::X);

    let (score, mv) = best_move(&board);
    assert_eq!(score, 1);
    assert_eq!(mv, Some(Move::new(0, 2)));

    let mut board = board;
    board.apply(mv.unwrap()).expect("Recommended move is legal");
    assert_eq!(classify(&board), Outcome::Won(Player::X));
}

#[test]
fn test_takes_immediate_win_for_o() {
    // O O .
    // X X .
    // . . X
    let board = play(&[(1, 0), (0, 0), (1, 1), (0, 1), (2, 2)]);
    assert_eq!(board.to_move(), Player::O);

    let (score, mv) = best_move(&board);
    assert_eq!(score, -1);
    assert_eq!(mv, Some(Move::new(0, 2)));

    let mut board = board;
    board.apply(mv.unwrap()).expect("Recommended move is legal");
    assert_eq!(classify(&board), Outcome::Won(Player::O));
}

#[test]
fn test_won_position_returns_score_and_no_move() {
    // X already holds the top row.
    let board = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert_eq!(best_move(&board), (1, None));
}

#[test]
fn test_drawn_position_returns_score_and_no_move() {
    let mut board = Board::new();
    let grid = [
        ['X', 'O', 'X'],
        ['O', 'X', 'O'],
        ['O', 'X', 'O'],
    ];
    for (row, cells) in grid.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            let square = match cell {
                'X' => Square::Occupied(Player::X),
                _ => Square::Occupied(Player::O),
            };
            board.set(row, col, square).expect("In-bounds square");
        }
    }

    assert_eq!(best_move(&board), (0, None));
}

#[test]
fn test_self_play_is_a_clean_draw() {
    // Both sides follow the search; every recommended move must apply
    // cleanly and perfect play ends in a draw.
    let mut board = Board::new();
    while classify(&board) == Outcome::InProgress {
        let (_, mv) = best_move(&board);
        let mv = mv.expect("Non-terminal position yields a move");
        board.apply(mv).expect("Recommended move is legal");
    }

    assert_eq!(classify(&board), Outcome::Draw);
}
