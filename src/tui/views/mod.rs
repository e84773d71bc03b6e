//! TUI views: the entry list, the detail panel, and the status bar.

pub mod detail;
pub mod entry_list;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    entry_list::render_header(frame, app, layout.header);
    entry_list::render(frame, app, layout.list);
    detail::render(frame, app, layout.detail);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render the active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog.clone() {
        ActiveDialog::EntryForm => {
            dialogs::entry_form::render(frame, app);
        }
        ActiveDialog::ConfirmDelete(id) => {
            let message = app
                .storage
                .entries
                .get(id)
                .ok()
                .flatten()
                .map(|e| format!("Delete the resentment at '{}'?", e.who))
                .unwrap_or_else(|| "Delete this entry?".to_string());
            dialogs::confirm::render(frame, &message);
        }
        ActiveDialog::Help => {
            dialogs::help::render(frame);
        }
        ActiveDialog::None => {}
    }
}
