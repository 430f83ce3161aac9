//! Tic-tac-toe - terminal game with a minimax computer opponent.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    tictactoe::run_tui(cli.mode, cli.computer_first, &cli.log_file).await
}
