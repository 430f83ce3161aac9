//! Application state and logic.

use crate::game::Board;
use tracing::debug;

use super::orchestrator::GameEvent;

/// Main application state.
pub struct App {
    board: Board,
    status_message: String,
    game_over: bool,
}

impl App {
    /// Creates a new application for a fresh game.
    pub fn new(status_message: impl Into<String>) -> Self {
        Self {
            board: Board::new(),
            status_message: status_message.into(),
            game_over: false,
        }
    }

    /// Gets the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the game has ended.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Handles a game event from the orchestrator.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::StateChanged(message) => {
                self.status_message = message;
            }
            GameEvent::Thinking { player } => {
                self.status_message = format!("{player} is thinking...");
            }
            GameEvent::MoveMade { player, mv } => match self.board.apply(mv) {
                Ok(()) => {
                    self.status_message = format!("{player} played {mv}");
                }
                Err(e) => {
                    // The orchestrator only reports applied moves, so this
                    // means the UI board fell out of sync.
                    self.status_message = format!("Move error: {e}");
                }
            },
            GameEvent::GameOver { winner } => {
                self.game_over = true;
                self.status_message = match winner {
                    Some(name) => format!("{name} wins! Press 'q' to quit."),
                    None => "The game has ended in a draw. Press 'q' to quit.".to_string(),
                };
            }
        }
    }
}
