//! Audit logging system for fourthstep
//!
//! Records entry create/delete operations and data-file quarantine events in
//! an append-only, line-delimited JSON log. Audit failures are reported to
//! the caller but are never allowed to block the underlying operation.

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
