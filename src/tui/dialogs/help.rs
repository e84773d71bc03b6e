//! Help dialog
//!
//! Key reference for the single-screen interface.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect_fixed(44, 13, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let key = |k: &str, desc: &str| {
        Line::from(vec![
            Span::styled(format!("  {:<10}", k), Style::default().fg(Color::Yellow)),
            Span::raw(desc.to_string()),
        ])
    };

    let lines = vec![
        Line::from(""),
        key("a / n", "Add a new resentment"),
        key("d / x", "Delete the selected entry"),
        key("j / Down", "Move selection down"),
        key("k / Up", "Move selection up"),
        key("g / G", "Jump to first / last entry"),
        key("?", "Show this help"),
        key("q", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "  Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
