//! Game orchestration between players.

use super::players::Player;
use crate::game::{Board, Mark, Move, Outcome, classify};
use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// Status line update.
    StateChanged(String),
    /// A computer player is searching for its move.
    Thinking {
        /// Display name of the searching player.
        player: String,
    },
    /// Move was made.
    MoveMade {
        /// Display name of the mover.
        player: String,
        /// The move that was applied.
        mv: Move,
    },
    /// Game ended.
    GameOver {
        /// Winner's display name, `None` on a draw.
        winner: Option<String>,
    },
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    board: Board,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator with a fresh board.
    pub fn new(
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            board: Board::new(),
            player_x,
            player_o,
            event_tx,
        }
    }

    /// Runs the game loop until the game ends.
    #[instrument(skip_all)]
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting game orchestration");

        loop {
            // Check if game is over
            match classify(&self.board) {
                Outcome::Won(mark) => {
                    let winner = match mark {
                        Mark::X => self.player_x.name(),
                        Mark::O => self.player_o.name(),
                    };
                    info!(winner, "Game over");
                    self.event_tx.send(GameEvent::GameOver {
                        winner: Some(winner.to_string()),
                    })?;
                    return Ok(());
                }
                Outcome::Draw => {
                    info!("Game over: draw");
                    self.event_tx.send(GameEvent::GameOver { winner: None })?;
                    return Ok(());
                }
                Outcome::InProgress => {}
            }

            // Get current player
            let mark = self.board.to_move();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let player_name = player.name().to_string();

            // Notify UI while the computer searches
            if !player.is_human() {
                self.event_tx.send(GameEvent::Thinking {
                    player: player_name.clone(),
                })?;
            }

            // Get move from player
            debug!(player = %player_name, %mark, "Waiting for move");
            let mv = player.get_move(&self.board).await?;

            match self.board.apply(mv) {
                Ok(()) => {
                    self.event_tx.send(GameEvent::MoveMade {
                        player: player_name,
                        mv,
                    })?;
                }
                Err(e) => {
                    // The board is unchanged, so the same player is asked
                    // again on the next pass.
                    warn!(player = %player_name, %mv, error = %e, "Rejected move");
                    self.event_tx
                        .send(GameEvent::StateChanged(format!("{e}. Try again.")))?;
                }
            }
        }
    }
}
