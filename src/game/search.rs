//! Exhaustive minimax search.

use super::moves::{Move, possible_moves};
use super::rules::classify;
use super::types::{Board, Outcome, Player};

/// Score of a terminal outcome, from X's point of view.
fn terminal_score(outcome: Outcome) -> Option<i32> {
    match outcome {
        Outcome::Won(Player::X) => Some(1),
        Outcome::Won(Player::O) => Some(-1),
        Outcome::Draw => Some(0),
        Outcome::InProgress => None,
    }
}

/// Chooses an optimal move for the player to move.
///
/// Returns the minimax score of the position (+1 X wins, 0 draw, -1 O
/// wins) together with the recommended move, which is `None` at a
/// terminal position. The full game tree is searched without pruning;
/// at most nine plies deep, the tree is small enough that brute force
/// is fine.
///
/// X maximizes and O minimizes. A child that ties the running best
/// replaces it, and the scan stops early once the replacing child is
/// itself terminal.
pub fn best_move(board: &Board) -> (i32, Option<Move>) {
    if let Some(score) = terminal_score(classify(board)) {
        return (score, None);
    }

    let mut best = None;
    if board.to_move() == Player::X {
        let mut max_eval = i32::MIN;
        for (child, mv) in possible_moves(board) {
            let (eval, reply) = best_move(&child);
            if eval >= max_eval {
                max_eval = eval;
                best = Some(mv);
                if reply.is_none() {
                    break;
                }
            }
        }
        (max_eval, best)
    } else {
        let mut min_eval = i32::MAX;
        for (child, mv) in possible_moves(board) {
            let (eval, reply) = best_move(&child);
            if eval <= min_eval {
                min_eval = eval;
                best = Some(mv);
                if reply.is_none() {
                    break;
                }
            }
        }
        (min_eval, best)
    }
}
