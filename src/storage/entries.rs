//! Entry repository for JSON storage
//!
//! Owns the in-memory ordered sequence of entries and keeps it synchronized
//! with resentments.json. The durable file holds a plain JSON array of entry
//! records, in insertion order.
//!
//! Mutations are transactional: the updated sequence is written to disk
//! first, and the in-memory state advances only after the write succeeds, so
//! memory and disk cannot drift apart on a failed write.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::InventoryError;
use crate::models::{Entry, EntryId};

use super::file_io::{read_json_or_quarantine, write_json_atomic, ReadOutcome};

/// Result of loading the durable collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Entries were read from disk
    Loaded(usize),
    /// No data file exists yet; starting empty
    Empty,
    /// The data file was unreadable; it was moved aside and we start empty
    Quarantined { moved_to: PathBuf, reason: String },
}

/// Repository for entry persistence
pub struct EntryRepository {
    path: PathBuf,
    /// Insertion-ordered collection; display order is storage order
    data: RwLock<Vec<Entry>>,
}

impl EntryRepository {
    /// Create a new entry repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load entries from disk
    ///
    /// A missing file means an empty collection. A corrupt file is moved
    /// aside and the collection starts empty; the caller decides how loudly
    /// to report that.
    pub fn load(&self) -> Result<LoadOutcome, InventoryError> {
        let outcome: ReadOutcome<Vec<Entry>> = read_json_or_quarantine(&self.path)?;

        let mut data = self.write_guard()?;
        match outcome {
            ReadOutcome::Loaded(entries) => {
                let count = entries.len();
                *data = entries;
                Ok(LoadOutcome::Loaded(count))
            }
            ReadOutcome::NoData => {
                data.clear();
                Ok(LoadOutcome::Empty)
            }
            ReadOutcome::Quarantined { moved_to, reason } => {
                data.clear();
                Ok(LoadOutcome::Quarantined { moved_to, reason })
            }
        }
    }

    /// Get an entry by ID
    pub fn get(&self, id: EntryId) -> Result<Option<Entry>, InventoryError> {
        let data = self.read_guard()?;
        Ok(data.iter().find(|e| e.id == id).cloned())
    }

    /// Get all entries in insertion order
    pub fn get_all(&self) -> Result<Vec<Entry>, InventoryError> {
        let data = self.read_guard()?;
        Ok(data.clone())
    }

    /// Count entries
    pub fn count(&self) -> Result<usize, InventoryError> {
        let data = self.read_guard()?;
        Ok(data.len())
    }

    /// Append an entry: persist the extended sequence, then commit to memory
    ///
    /// Rejects a duplicate id; ids are never reused within the store.
    pub fn append(&self, entry: Entry) -> Result<(), InventoryError> {
        let mut data = self.write_guard()?;

        if data.iter().any(|e| e.id == entry.id) {
            return Err(InventoryError::Duplicate {
                entity_type: "Entry",
                identifier: entry.id.to_string(),
            });
        }

        let mut updated = data.clone();
        updated.push(entry);
        write_json_atomic(&self.path, &updated)?;

        *data = updated;
        Ok(())
    }

    /// Remove an entry by ID: persist the filtered sequence, then commit
    ///
    /// Returns `Ok(false)` without touching disk when the id is not present,
    /// so a repeated remove is a no-op.
    pub fn remove(&self, id: EntryId) -> Result<bool, InventoryError> {
        let mut data = self.write_guard()?;

        if !data.iter().any(|e| e.id == id) {
            return Ok(false);
        }

        let updated: Vec<Entry> = data.iter().filter(|e| e.id != id).cloned().collect();
        write_json_atomic(&self.path, &updated)?;

        *data = updated;
        Ok(true)
    }

    fn read_guard(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<Entry>>, InventoryError> {
        self.data
            .read()
            .map_err(|e| InventoryError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_guard(&self) -> Result<std::sync::RwLockWriteGuard<'_, Vec<Entry>>, InventoryError> {
        self.data
            .write()
            .map_err(|e| InventoryError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryDraft;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, EntryRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("resentments.json");
        let repo = EntryRepository::new(path);
        (temp_dir, repo)
    }

    fn test_entry(who: &str, what: &str) -> Entry {
        Entry::from_draft(EntryDraft::new(who, what)).unwrap()
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        assert_eq!(repo.load().unwrap(), LoadOutcome::Empty);
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_append_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let entry = test_entry("Boss", "Criticized me publicly");
        let id = entry.id;

        repo.append(entry).unwrap();

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.who, "Boss");
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let entry = test_entry("Boss", "Criticized me");
        repo.append(entry.clone()).unwrap();

        let err = repo.append(entry).unwrap_err();
        assert!(matches!(err, InventoryError::Duplicate { .. }));
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_save_and_reload_preserves_order() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let first = test_entry("Boss", "Criticized me");
        let second = test_entry("Landlord", "Raised the rent");
        let third = test_entry("Neighbor", "Blocked the driveway");
        let ids = [first.id, second.id, third.id];

        repo.append(first).unwrap();
        repo.append(second).unwrap();
        repo.append(third).unwrap();

        // Fresh repository on the same file
        let repo2 = EntryRepository::new(temp_dir.path().join("resentments.json"));
        assert_eq!(repo2.load().unwrap(), LoadOutcome::Loaded(3));

        let loaded = repo2.get_all().unwrap();
        let loaded_ids: Vec<_> = loaded.iter().map(|e| e.id).collect();
        assert_eq!(loaded_ids, ids);
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let first = test_entry("A", "first");
        let second = test_entry("B", "second");
        let first_id = first.id;
        let second_id = second.id;

        repo.append(first).unwrap();
        repo.append(second).unwrap();

        assert!(repo.remove(first_id).unwrap());

        let remaining = repo.get_all().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second_id);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let entry = test_entry("Boss", "Criticized me");
        let id = entry.id;
        repo.append(entry).unwrap();

        assert!(repo.remove(id).unwrap());
        // Second remove is a no-op, not an error
        assert!(!repo.remove(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.append(test_entry("Boss", "Criticized me")).unwrap();
        assert!(!repo.remove(EntryId::new()).unwrap());
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_append_persists_immediately() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.append(test_entry("Boss", "Criticized me")).unwrap();

        // The append itself already reached disk
        let repo2 = EntryRepository::new(temp_dir.path().join("resentments.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.count().unwrap(), 1);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_empty() {
        let (temp_dir, repo) = create_test_repo();

        let path = temp_dir.path().join("resentments.json");
        std::fs::write(&path, "{{{ not json").unwrap();

        match repo.load().unwrap() {
            LoadOutcome::Quarantined { moved_to, .. } => {
                assert!(moved_to.exists());
            }
            other => panic!("expected Quarantined, got {:?}", other),
        }
        assert_eq!(repo.count().unwrap(), 0);

        // The store remains usable afterwards
        repo.append(test_entry("Boss", "Criticized me")).unwrap();
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_failed_append_leaves_memory_unchanged() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        // A directory at the data path makes the atomic rename fail
        std::fs::create_dir(temp_dir.path().join("resentments.json")).unwrap();

        let err = repo.append(test_entry("Boss", "Criticized me"));
        assert!(err.is_err());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_failed_remove_leaves_memory_unchanged() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let entry = test_entry("Boss", "Criticized me");
        let id = entry.id;
        repo.append(entry).unwrap();

        let path = temp_dir.path().join("resentments.json");
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        assert!(repo.remove(id).is_err());

        // Still present in memory; memory never ran ahead of disk
        assert_eq!(repo.count().unwrap(), 1);
        assert!(repo.get(id).unwrap().is_some());
    }

    #[test]
    fn test_file_is_plain_json_array() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        repo.append(test_entry("Boss", "Criticized me")).unwrap();

        let raw = std::fs::read_to_string(temp_dir.path().join("resentments.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value.as_array().unwrap().len(), 1);
        assert!(value[0].get("createdAt").is_some());
    }
}
