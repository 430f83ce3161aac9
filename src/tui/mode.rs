//! Game mode selection.

/// Game mode - who controls each mark?
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, strum::EnumIter)]
pub enum GameMode {
    /// Two humans share the keyboard.
    HumanVsHuman,
    /// Human against the minimax computer.
    HumanVsComputer,
    /// The computer plays both sides.
    ComputerVsComputer,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &str {
        match self {
            GameMode::HumanVsHuman => "Human vs Human",
            GameMode::HumanVsComputer => "Human vs Computer",
            GameMode::ComputerVsComputer => "Computer vs Computer",
        }
    }
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::HumanVsComputer
    }
}
