//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;

/// Renders the title, board grid, and status line.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(7),    // Board
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let help = if app.game_over() {
        String::new()
    } else {
        "\n\nPress 1-9 to place a mark, 'q' to quit".to_string()
    };
    let board = Paragraph::new(format!("\n{}{}", app.board().render(), help))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(board, chunks[1]);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

/// Renders a startup prompt as a numbered menu.
pub fn draw_menu(frame: &mut Frame, title: &str, options: &[String]) {
    let area = frame.area();

    let mut text = format!("{title}\n\n");
    for (index, option) in options.iter().enumerate() {
        text.push_str(&format!("{}: {}\n", index + 1, option));
    }
    text.push_str("\nPress the number of your choice, or 'q' to quit.");

    let menu = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().title("Tic-Tac-Toe").borders(Borders::ALL));
    frame.render_widget(menu, area);
}
