//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::models::EntryId;
use crate::services::EntryService;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    handle_list_key(app, key)
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog.clone() {
        ActiveDialog::EntryForm => {
            dialogs::entry_form::handle_key(app, key);
        }
        ActiveDialog::ConfirmDelete(id) => {
            handle_confirm_delete_key(app, id, key);
        }
        ActiveDialog::Help => {
            // Any key dismisses the help dialog
            app.close_dialog();
        }
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Handle keys in the confirm-delete dialog
fn handle_confirm_delete_key(app: &mut App, id: EntryId, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.close_dialog();
            delete_entry(app, id);
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.close_dialog();
        }
        _ => {}
    }
}

/// Handle keys in the list screen
fn handle_list_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
        }

        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
        }

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => {
            app.clear_status();
            app.move_down();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.clear_status();
            app.move_up();
        }
        KeyCode::Char('g') => {
            app.selected_index = 0;
        }
        KeyCode::Char('G') => {
            let count = app.storage.entries.count().unwrap_or(0);
            app.selected_index = count.saturating_sub(1);
        }

        // Add a new entry
        KeyCode::Char('a') | KeyCode::Char('n') => {
            app.clear_status();
            app.open_dialog(ActiveDialog::EntryForm);
        }

        // Delete the selected entry (two-step unless confirmation is off)
        KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => {
            if let Some(entry) = app.selected_entry() {
                if app.settings.confirm_delete {
                    app.open_dialog(ActiveDialog::ConfirmDelete(entry.id));
                } else {
                    delete_entry(app, entry.id);
                }
            }
        }

        KeyCode::Esc => {
            app.clear_status();
        }

        _ => {}
    }

    Ok(())
}

/// Execute a confirmed deletion
fn delete_entry(app: &mut App, id: EntryId) {
    let service = EntryService::new(app.storage);
    match service.remove(id) {
        Ok(true) => {
            app.clamp_selection();
            app.set_status("Entry deleted");
        }
        Ok(false) => {
            // Already gone; nothing to report beyond fixing the cursor
            app.clamp_selection();
        }
        Err(e) => {
            app.set_status(format!("Delete failed: {}", e));
        }
    }
}
