//! Terminal User Interface module
//!
//! A full-screen ratatui interface for the resentment inventory: a list of
//! entries with a detail pane, an add-entry form, and a confirm-delete dialog.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
