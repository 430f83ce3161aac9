//! Terminal UI for tic-tac-toe.

mod app;
mod mode;
mod orchestrator;
mod players;
mod ui;

pub use mode::GameMode;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use std::path::Path;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tokio::sync::{Mutex, mpsc};
use tracing::{error, info};

use app::App;
use orchestrator::{GameEvent, Orchestrator};
use players::{HumanPlayer, MinimaxPlayer, Player};

/// Runs the terminal client.
///
/// `mode` preselects the startup menu; when `None` the menu is shown.
/// `computer_first` gives the computer the X mark in human-vs-computer
/// games started from the command line.
pub async fn run_tui(mode: Option<GameMode>, computer_first: bool, log_file: &Path) -> Result<()> {
    // Log to a file so tracing output does not interfere with the TUI.
    let log_file = std::fs::File::create(log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_session(&mut terminal, mode, computer_first).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "Game loop error");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

/// Runs the startup prompts and a single game to completion.
async fn run_session<B: Backend>(
    terminal: &mut Terminal<B>,
    mode: Option<GameMode>,
    computer_first: bool,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let Some((mode, computer_first)) = select_mode(terminal, mode, computer_first)? else {
        return Ok(()); // user quit at the menu
    };

    info!(mode = mode.name(), computer_first, "Mode selected");

    // Create channels for communication
    let (key_tx, key_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let keys = Arc::new(Mutex::new(key_rx));

    // Create players
    let (player_x, player_o): (Box<dyn Player>, Box<dyn Player>) = match mode {
        GameMode::HumanVsHuman => (
            Box::new(HumanPlayer::new("Player X", Arc::clone(&keys))),
            Box::new(HumanPlayer::new("Player O", Arc::clone(&keys))),
        ),
        GameMode::HumanVsComputer if computer_first => (
            Box::new(MinimaxPlayer::new("Computer")),
            Box::new(HumanPlayer::new("You", Arc::clone(&keys))),
        ),
        GameMode::HumanVsComputer => (
            Box::new(HumanPlayer::new("You", Arc::clone(&keys))),
            Box::new(MinimaxPlayer::new("Computer")),
        ),
        GameMode::ComputerVsComputer => (
            Box::new(MinimaxPlayer::new("Computer X")),
            Box::new(MinimaxPlayer::new("Computer O")),
        ),
    };

    let first_status = format!("{} moves first as X.", player_x.name());

    // Create orchestrator and run it in the background
    let mut orchestrator = Orchestrator::new(player_x, player_o, event_tx);
    let orchestrator_handle = tokio::spawn(async move {
        if let Err(e) = orchestrator.run().await {
            tracing::error!(error = %e, "Orchestrator error");
        }
    });

    let app = App::new(first_status);
    let res = run_app(terminal, app, key_tx, &mut event_rx).await;

    orchestrator_handle.abort();
    res
}

/// Resolves the game mode and first mover, prompting where needed.
///
/// Returns `None` if the user quits at a prompt.
fn select_mode<B: Backend>(
    terminal: &mut Terminal<B>,
    preset: Option<GameMode>,
    computer_first: bool,
) -> Result<Option<(GameMode, bool)>>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let mode = match preset {
        Some(mode) => mode,
        None => {
            let options: Vec<GameMode> = GameMode::iter().collect();
            let labels: Vec<String> = options.iter().map(|m| m.name().to_string()).collect();
            let choice = prompt_choice(
                terminal,
                "Do you want to play against a human or the computer?",
                &labels,
            )?;
            match choice {
                Some(index) => options[index],
                None => return Ok(None),
            }
        }
    };

    // Command-line starts take the first mover from the flag.
    let computer_first = if mode == GameMode::HumanVsComputer && preset.is_none() {
        let labels = ["You".to_string(), "Computer".to_string()];
        match prompt_choice(terminal, "Who goes first?", &labels)? {
            Some(index) => index == 1,
            None => return Ok(None),
        }
    } else {
        computer_first
    };

    Ok(Some((mode, computer_first)))
}

/// Draws a numbered menu and waits for a digit choice.
///
/// Returns the zero-based index of the choice, or `None` on 'q'.
fn prompt_choice<B: Backend>(
    terminal: &mut Terminal<B>,
    title: &str,
    options: &[String],
) -> Result<Option<usize>>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw_menu(f, title, options))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => return Ok(None),
                    KeyCode::Char(c) => {
                        if let Some(digit) = c.to_digit(10) {
                            let choice = digit as usize;
                            if choice >= 1 && choice <= options.len() {
                                return Ok(Some(choice - 1));
                            }
                        }
                    }
                    _ => {}
                }
            }
        }
    }
}

/// UI loop: draws the board, applies orchestrator events, and forwards
/// keys to the human players.
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    key_tx: mpsc::UnboundedSender<KeyCode>,
    event_rx: &mut mpsc::UnboundedReceiver<GameEvent>,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Check for UI events from orchestrator
        while let Ok(event) = event_rx.try_recv() {
            app.handle_event(event);
        }

        // Check for keyboard input
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    code => {
                        // Send all other keys to the human players
                        let _ = key_tx.send(code);
                    }
                }
            }
        }
    }
}
