//! Terminal output formatting
//!
//! Plain-text formatting for the CLI commands; the TUI renders separately.

pub mod entry;

pub use entry::{format_entry_details, format_entry_list};
