//! Entry list view
//!
//! The main list of resentments with a header showing the entry count.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::tui::app::App;

/// Render the header (title + entry count)
pub fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    let count = app.storage.entries.count().unwrap_or(0);
    let subtitle = match count {
        1 => "1 entry".to_string(),
        n => format!("{} entries", n),
    };

    let block = Block::default()
        .title(" Step 4: Resentments ")
        .title_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(subtitle)
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}

/// Render the entry table
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let entries = app.entries();

    if entries.is_empty() {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "No resentments added yet",
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                "Press 'a' to start your inventory",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let text = Paragraph::new(lines)
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(20), // Who
        Constraint::Min(20),    // What
        Constraint::Length(12), // Added
    ];

    let header = Row::new(vec![
        Cell::from("Who").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("What happened").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Added").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let date_format = app.settings.date_format.clone();
    let rows: Vec<Row> = entries
        .iter()
        .map(|entry| {
            Row::new(vec![
                Cell::from(entry.who.clone()),
                Cell::from(entry.what.clone()),
                Cell::from(entry.created_at.format(&date_format).to_string())
                    .style(Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut state);
}
