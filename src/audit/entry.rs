//! Audit entry data structures
//!
//! Defines the structure of audit log entries: entry creation and deletion,
//! plus quarantine events when an unreadable data file is moved aside.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Entry;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Entry was created
    Create,
    /// Entry was deleted
    Delete,
    /// The data file was unreadable and moved aside
    Quarantine,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Quarantine => write!(f, "QUARANTINE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// ID of the affected entry, or the quarantined file path
    pub subject: String,

    /// JSON snapshot of the entry (for creates and deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<serde_json::Value>,

    /// Why the operation happened, where it isn't obvious (quarantine reason)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl AuditEntry {
    /// Audit a created entry
    pub fn created(entry: &Entry) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            subject: entry.id.to_string(),
            snapshot: serde_json::to_value(entry).ok(),
            detail: None,
        }
    }

    /// Audit a deleted entry
    pub fn deleted(entry: &Entry) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            subject: entry.id.to_string(),
            snapshot: serde_json::to_value(entry).ok(),
            detail: None,
        }
    }

    /// Audit a quarantined data file
    pub fn quarantine(moved_to: String, reason: String) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Quarantine,
            subject: moved_to,
            snapshot: None,
            detail: Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryDraft;

    #[test]
    fn test_created_entry_carries_snapshot() {
        let entry = Entry::from_draft(EntryDraft::new("Boss", "Criticized me")).unwrap();
        let audit = AuditEntry::created(&entry);

        assert_eq!(audit.operation, Operation::Create);
        assert_eq!(audit.subject, entry.id.to_string());
        assert!(audit.snapshot.is_some());
        assert!(audit.detail.is_none());
    }

    #[test]
    fn test_quarantine_entry_carries_reason() {
        let audit = AuditEntry::quarantine(
            "/tmp/resentments.json.corrupt".into(),
            "expected value at line 1".into(),
        );

        assert_eq!(audit.operation, Operation::Quarantine);
        assert!(audit.snapshot.is_none());
        assert_eq!(audit.detail.as_deref(), Some("expected value at line 1"));
    }

    #[test]
    fn test_serde_round_trip() {
        let entry = Entry::from_draft(EntryDraft::new("Boss", "Criticized me")).unwrap();
        let audit = AuditEntry::deleted(&entry);

        let json = serde_json::to_string(&audit).unwrap();
        let parsed: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.operation, Operation::Delete);
        assert_eq!(parsed.subject, audit.subject);
    }
}
