//! Service layer for fourthstep
//!
//! The service layer provides business logic on top of the storage layer:
//! draft validation, id generation, and audit recording.

pub mod entry;

pub use entry::EntryService;
