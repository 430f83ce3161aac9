//! Command-line interface for tictactoe.

use clap::Parser;
use std::path::PathBuf;
use tictactoe::GameMode;

/// Tic-tac-toe - terminal game with a minimax computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe with an exhaustive minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Game mode. The startup menu is shown when omitted.
    #[arg(long, value_enum)]
    pub mode: Option<GameMode>,

    /// The computer plays X, and so moves first, in human-vs-computer mode.
    #[arg(long)]
    pub computer_first: bool,

    /// File tracing output is written to.
    #[arg(long, default_value = "tictactoe.log")]
    pub log_file: PathBuf,
}
