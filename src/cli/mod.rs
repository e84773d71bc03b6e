//! CLI command handlers
//!
//! Implements the non-interactive command surface; the interactive interface
//! lives in `tui`.

pub mod entry;

pub use entry::{handle_add, handle_list, handle_remove, handle_show};
