//! Player trait and implementations.

mod human;
mod minimax;

pub use human::HumanPlayer;
pub use minimax::MinimaxPlayer;

use crate::game::{Board, Move};
use anyhow::Result;

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets the next move from this player.
    ///
    /// The move is not validated here; the orchestrator applies it and
    /// re-prompts on rejection.
    async fn get_move(&mut self, board: &Board) -> Result<Move>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// True for players driven by keyboard input.
    fn is_human(&self) -> bool;
}
