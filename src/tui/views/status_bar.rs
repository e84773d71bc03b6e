//! Status bar
//!
//! Shows transient status messages, falling back to key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let line = if let Some(ref message) = app.status_message {
        Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Green),
        ))
    } else {
        Line::from(Span::styled(
            " a:Add  d:Delete  j/k:Move  ?:Help  q:Quit",
            Style::default().fg(Color::DarkGray),
        ))
    };

    frame.render_widget(Paragraph::new(line), area);
}
