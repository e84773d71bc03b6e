//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! The original screen's list-mode/form-mode boolean becomes `ActiveDialog`,
//! with at most one dialog active at a time.

use crate::config::Settings;
use crate::models::{Entry, EntryId};
use crate::storage::Storage;

use super::dialogs::entry_form::EntryFormState;

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    /// The add-entry form
    EntryForm,
    /// Confirm deletion of the given entry
    ConfirmDelete(EntryId),
    /// Key reference
    Help,
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Selected entry index in the list
    pub selected_index: usize,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Status message to display
    pub status_message: Option<String>,

    /// Entry form state
    pub entry_form: EntryFormState,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self {
            storage,
            settings,
            should_quit: false,
            selected_index: 0,
            active_dialog: ActiveDialog::default(),
            status_message: None,
            entry_form: EntryFormState::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        if dialog == ActiveDialog::EntryForm {
            // Fresh form for a new entry
            self.entry_form = EntryFormState::new();
        }
        self.active_dialog = dialog;
    }

    /// Close the active dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Whether any dialog is open
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Current entries in display order
    pub fn entries(&self) -> Vec<Entry> {
        self.storage.entries.get_all().unwrap_or_default()
    }

    /// The entry under the cursor, if any
    pub fn selected_entry(&self) -> Option<Entry> {
        self.entries().get(self.selected_index).cloned()
    }

    /// Move the selection down, clamped to the list
    pub fn move_down(&mut self) {
        let count = self.storage.entries.count().unwrap_or(0);
        if count > 0 && self.selected_index < count - 1 {
            self.selected_index += 1;
        }
    }

    /// Move the selection up
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Keep the selection in bounds after a deletion
    pub fn clamp_selection(&mut self) {
        let count = self.storage.entries.count().unwrap_or(0);
        if count == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= count {
            self.selected_index = count - 1;
        }
    }
}
