//! Entry form dialog
//!
//! Modal form for adding a new resentment with validation and save/cancel,
//! the form-mode of the original screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::EntryDraft;
use crate::services::EntryService;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;
use crate::tui::widgets::TextInput;

/// Which field is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryField {
    #[default]
    Who,
    What,
    Affects,
    MyPart,
}

impl EntryField {
    fn label(self) -> &'static str {
        match self {
            EntryField::Who => "Who or what am I resentful at? *",
            EntryField::What => "What happened? (The cause) *",
            EntryField::Affects => "How does it affect me?",
            EntryField::MyPart => "What was my part?",
        }
    }
}

/// State for the entry form dialog
#[derive(Debug, Clone)]
pub struct EntryFormState {
    /// Required: who the resentment is at
    pub who_input: TextInput,

    /// Required: what happened
    pub what_input: TextInput,

    /// Optional: how it affects me
    pub affects_input: TextInput,

    /// Optional: my part
    pub my_part_input: TextInput,

    /// Currently focused field
    pub focused_field: EntryField,

    /// Error message to display
    pub error_message: Option<String>,
}

impl Default for EntryFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryFormState {
    /// Create a fresh form
    pub fn new() -> Self {
        Self {
            who_input: TextInput::new().placeholder("Person, institution, or principle"),
            what_input: TextInput::new().placeholder("Describe what they did..."),
            affects_input: TextInput::new()
                .placeholder("My self-esteem, security, ambitions, relationships..."),
            my_part_input: TextInput::new()
                .placeholder("Where was I selfish, dishonest, self-seeking, or frightened?"),
            focused_field: EntryField::Who,
            error_message: None,
        }
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = match self.focused_field {
            EntryField::Who => EntryField::What,
            EntryField::What => EntryField::Affects,
            EntryField::Affects => EntryField::MyPart,
            EntryField::MyPart => EntryField::Who,
        };
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = match self.focused_field {
            EntryField::Who => EntryField::MyPart,
            EntryField::What => EntryField::Who,
            EntryField::Affects => EntryField::What,
            EntryField::MyPart => EntryField::Affects,
        };
    }

    /// The input belonging to the focused field
    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focused_field {
            EntryField::Who => &mut self.who_input,
            EntryField::What => &mut self.what_input,
            EntryField::Affects => &mut self.affects_input,
            EntryField::MyPart => &mut self.my_part_input,
        }
    }

    /// Build a draft from the current field values
    pub fn build_draft(&self) -> EntryDraft {
        EntryDraft::new(self.who_input.value(), self.what_input.value())
            .affects(self.affects_input.value())
            .my_part(self.my_part_input.value())
    }

    /// Validate the form and return any error
    pub fn validate(&self) -> Result<(), String> {
        self.build_draft().validate().map_err(|e| e.to_string())
    }

    /// Clear any error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the entry form dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(70, 60, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Resentment ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Who
            Constraint::Length(2), // What
            Constraint::Length(2), // Affects
            Constraint::Length(2), // My part
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let focused = app.entry_form.focused_field;
    let fields = [
        (EntryField::Who, app.entry_form.who_input.clone()),
        (EntryField::What, app.entry_form.what_input.clone()),
        (EntryField::Affects, app.entry_form.affects_input.clone()),
        (EntryField::MyPart, app.entry_form.my_part_input.clone()),
    ];

    for (i, (field, input)) in fields.iter().enumerate() {
        render_text_field(frame, chunks[i], field.label(), input, *field == focused);
    }

    if let Some(ref error) = app.entry_form.error_message {
        let error_line = Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[4]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[5]);
}

/// Render one labelled text field with cursor
fn render_text_field(frame: &mut Frame, area: Rect, label: &str, input: &TextInput, focused: bool) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let value = input.value();
    let value_style = Style::default().fg(Color::White);

    let display_value = if value.is_empty() && !focused {
        input.placeholder.clone()
    } else {
        value.to_string()
    };

    let mut spans = vec![Span::styled(format!("{}: ", label), label_style)];

    if focused {
        let cursor_pos = input.cursor.min(display_value.len());
        let (before, after) = display_value.split_at(cursor_pos);

        spans.push(Span::styled(before.to_string(), value_style));

        let cursor_char = after.chars().next().unwrap_or(' ');
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));

        if after.len() > cursor_char.len_utf8() {
            spans.push(Span::styled(
                after[cursor_char.len_utf8()..].to_string(),
                value_style,
            ));
        }
    } else {
        let muted = if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            value_style
        };
        spans.push(Span::styled(display_value, muted));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Handle key input for the entry form
pub fn handle_key(app: &mut App, key: crossterm::event::KeyEvent) -> bool {
    use crossterm::event::KeyCode;

    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            return true;
        }

        KeyCode::Tab | KeyCode::Down => {
            app.entry_form.next_field();
            return true;
        }

        KeyCode::BackTab | KeyCode::Up => {
            app.entry_form.prev_field();
            return true;
        }

        KeyCode::Enter => {
            if let Err(e) = save_entry(app) {
                app.entry_form.set_error(e);
            }
            return true;
        }

        _ => {}
    }

    // Editing keys go to the focused field
    let input = app.entry_form.focused_input_mut();
    let handled = match key.code {
        KeyCode::Backspace => {
            input.backspace();
            true
        }
        KeyCode::Delete => {
            input.delete();
            true
        }
        KeyCode::Left => {
            input.move_left();
            true
        }
        KeyCode::Right => {
            input.move_right();
            true
        }
        KeyCode::Home => {
            input.move_start();
            true
        }
        KeyCode::End => {
            input.move_end();
            true
        }
        KeyCode::Char(c) => {
            input.insert(c);
            true
        }
        _ => false,
    };

    if handled {
        app.entry_form.clear_error();
    }
    handled
}

/// Validate and save the entry
fn save_entry(app: &mut App) -> Result<(), String> {
    app.entry_form.validate()?;

    let draft = app.entry_form.build_draft();
    let service = EntryService::new(app.storage);

    let entry = service.add(draft).map_err(|e| e.to_string())?;

    app.close_dialog();
    app.set_status(format!("Saved resentment at '{}'", entry.who));
    Ok(())
}
