//! Core data models for fourthstep
//!
//! This module contains the data structures for the inventory domain:
//! the entry record, its draft form, and the strongly-typed entry id.

pub mod entry;
pub mod ids;

pub use entry::{Entry, EntryDraft, EntryValidationError};
pub use ids::EntryId;
