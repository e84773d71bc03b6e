//! Modal dialogs: the entry form, delete confirmation, and help.

pub mod confirm;
pub mod entry_form;
pub mod help;
