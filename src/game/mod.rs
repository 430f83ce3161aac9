mod moves;
mod rules;
mod search;
mod types;

pub use moves::{Move, MoveError, possible_moves};
pub use rules::classify;
pub use search::best_move;
pub use types::{Board, Outcome, Player, Square};

/// Alias for clarity where "player" means a seat at the table.
pub type Mark = Player;
