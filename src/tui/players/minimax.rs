//! Computer player backed by the minimax search.

use super::Player;
use crate::game::{Board, Move, best_move};
use anyhow::Result;
use tracing::debug;

/// Computer player that plays a minimax-optimal move.
pub struct MinimaxPlayer {
    name: String,
}

impl MinimaxPlayer {
    /// Creates a new computer player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait::async_trait]
impl Player for MinimaxPlayer {
    async fn get_move(&mut self, board: &Board) -> Result<Move> {
        debug!(player = %self.name, "Computer choosing move");

        // Small delay so the move is visible in the UI
        tokio::time::sleep(std::time::Duration::from_millis(400)).await;

        let (score, mv) = best_move(board);
        let mv = mv.ok_or_else(|| anyhow::anyhow!("No moves available"))?;
        debug!(player = %self.name, score, %mv, "Computer chose move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        false
    }
}
