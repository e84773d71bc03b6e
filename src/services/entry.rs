//! Entry service
//!
//! Business logic for the resentment inventory: validated creation, lookup,
//! and confirmed deletion of entries. The service is the only mutation path;
//! both the CLI and the TUI go through it.

use crate::audit::AuditEntry;
use crate::error::{InventoryError, InventoryResult};
use crate::models::{Entry, EntryDraft, EntryId};
use crate::storage::Storage;

/// Service for inventory entry management
pub struct EntryService<'a> {
    storage: &'a Storage,
}

impl<'a> EntryService<'a> {
    /// Create a new entry service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a new entry from a draft
    ///
    /// Fails with a validation error when `who` or `what` is empty. On
    /// success the entry has been durably persisted; a write failure leaves
    /// the in-memory collection untouched.
    pub fn add(&self, draft: EntryDraft) -> InventoryResult<Entry> {
        let entry = Entry::from_draft(draft)
            .map_err(|e| InventoryError::Validation(e.to_string()))?;

        self.storage.entries.append(entry.clone())?;

        // Audit is best-effort; the entry is already saved
        let _ = self.storage.audit.log(&AuditEntry::created(&entry));

        Ok(entry)
    }

    /// Remove an entry by ID
    ///
    /// Returns `Ok(false)` when no entry with this id exists; calling twice
    /// with the same id is the same as calling once. Confirmation is the
    /// interface layer's job.
    pub fn remove(&self, id: EntryId) -> InventoryResult<bool> {
        let entry = self.storage.entries.get(id)?;

        let removed = self.storage.entries.remove(id)?;
        if removed {
            if let Some(entry) = entry {
                let _ = self.storage.audit.log(&AuditEntry::deleted(&entry));
            }
        }

        Ok(removed)
    }

    /// Get a single entry by ID
    pub fn get(&self, id: EntryId) -> InventoryResult<Option<Entry>> {
        self.storage.entries.get(id)
    }

    /// Find an entry by full or short id string
    pub fn find(&self, identifier: &str) -> InventoryResult<Option<Entry>> {
        if let Ok(id) = identifier.parse::<EntryId>() {
            return self.storage.entries.get(id);
        }

        // Fall back to matching the short display form
        let entries = self.storage.entries.get_all()?;
        Ok(entries.into_iter().find(|e| e.id.short() == identifier))
    }

    /// List all entries in insertion order
    pub fn list(&self) -> InventoryResult<Vec<Entry>> {
        self.storage.entries.get_all()
    }

    /// Count entries
    pub fn count(&self) -> InventoryResult<usize> {
        self.storage.entries.count()
    }
}
