//! Storage layer for fourthstep
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod entries;
pub mod file_io;

pub use entries::{EntryRepository, LoadOutcome};

use crate::audit::AuditLogger;
use crate::config::paths::InventoryPaths;
use crate::error::InventoryError;

/// Main storage coordinator
///
/// Owns the entry repository and the audit logger, constructed once at
/// startup and torn down at shutdown; there is no ambient module state.
pub struct Storage {
    paths: InventoryPaths,
    pub entries: EntryRepository,
    pub audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: InventoryPaths) -> Result<Self, InventoryError> {
        paths.ensure_directories()?;

        Ok(Self {
            entries: EntryRepository::new(paths.entries_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &InventoryPaths {
        &self.paths
    }

    /// Load all data from disk
    ///
    /// A quarantined (corrupt) data file is recorded in the audit log; the
    /// outcome is returned so the interface layer can tell the user.
    pub fn load_all(&self) -> Result<LoadOutcome, InventoryError> {
        let outcome = self.entries.load()?;

        if let LoadOutcome::Quarantined { moved_to, reason } = &outcome {
            // Logged, never fatal: the app still starts with an empty list
            let _ = self.audit.log(&crate::audit::AuditEntry::quarantine(
                moved_to.display().to_string(),
                reason.clone(),
            ));
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = InventoryPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(storage.load_all().unwrap(), LoadOutcome::Empty);
    }

    #[test]
    fn test_quarantine_is_audited() {
        let temp_dir = TempDir::new().unwrap();
        let paths = InventoryPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone()).unwrap();

        std::fs::write(paths.entries_file(), "broken").unwrap();

        match storage.load_all().unwrap() {
            LoadOutcome::Quarantined { .. } => {}
            other => panic!("expected Quarantined, got {:?}", other),
        }

        let audit_entries = storage.audit.read_all().unwrap();
        assert_eq!(audit_entries.len(), 1);
    }
}
