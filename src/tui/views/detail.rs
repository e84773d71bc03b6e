//! Detail panel
//!
//! The card view of the selected entry. Blank optional sections are hidden,
//! like the original card.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;

/// Render the selected entry's details
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Detail ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(entry) = app.selected_entry() else {
        let text = Paragraph::new("").block(block);
        frame.render_widget(text, area);
        return;
    };

    let label = |text: &str| {
        Line::from(Span::styled(
            text.to_string(),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let value = |text: &str| Line::from(Span::raw(format!("  {}", text)));

    let mut lines = vec![
        Line::from(Span::styled(
            entry.who.clone(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        label("WHAT HAPPENED:"),
        value(&entry.what),
    ];

    if !entry.affects.is_empty() {
        lines.push(label("HOW IT AFFECTS ME:"));
        lines.push(value(&entry.affects));
    }

    if !entry.my_part.is_empty() {
        lines.push(label("MY PART:"));
        lines.push(value(&entry.my_part));
    }

    lines.push(Line::from(Span::styled(
        format!("Added: {}", entry.created_at.format(&app.settings.date_format)),
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
