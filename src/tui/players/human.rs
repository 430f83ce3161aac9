//! Human player that gets input from keyboard.

use super::Player;
use crate::game::{Board, Move};
use anyhow::Result;
use crossterm::event::KeyCode;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

/// Human player using keyboard input.
///
/// The key receiver is shared so that both marks can be human in the
/// same session; only the player whose turn it is holds the lock.
pub struct HumanPlayer {
    name: String,
    keys: Arc<Mutex<mpsc::UnboundedReceiver<KeyCode>>>,
}

impl HumanPlayer {
    /// Creates a new human player reading from the shared key channel.
    pub fn new(
        name: impl Into<String>,
        keys: Arc<Mutex<mpsc::UnboundedReceiver<KeyCode>>>,
    ) -> Self {
        Self {
            name: name.into(),
            keys,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn get_move(&mut self, _board: &Board) -> Result<Move> {
        let mut keys = self.keys.lock().await;

        // Wait for a cell digit; other keys are ignored
        while let Some(key) = keys.recv().await {
            if let KeyCode::Char(c) = key {
                if let Some(digit) = c.to_digit(10) {
                    let cell = digit as usize;
                    if (1..=9).contains(&cell) {
                        if let Some(mv) = Move::from_index(cell - 1) {
                            return Ok(mv);
                        }
                    }
                }
            }
        }

        anyhow::bail!("Input channel closed")
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }
}
