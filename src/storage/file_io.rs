//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::InventoryError;

/// What a read of the durable collection found
#[derive(Debug)]
pub enum ReadOutcome<T> {
    /// File was present and parsed
    Loaded(T),
    /// File does not exist yet
    NoData,
    /// File existed but could not be parsed; it was renamed aside
    Quarantined { moved_to: PathBuf, reason: String },
}

/// Read JSON from a file, distinguishing "no data yet" from "corrupt data"
///
/// A corrupt file is renamed to `<name>.corrupt` so the next write does not
/// destroy whatever the user might still recover from it by hand.
pub fn read_json_or_quarantine<T, P>(path: P) -> Result<ReadOutcome<T>, InventoryError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(ReadOutcome::NoData);
    }

    let file = File::open(path)
        .map_err(|e| InventoryError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    match serde_json::from_reader(reader) {
        Ok(data) => Ok(ReadOutcome::Loaded(data)),
        Err(e) => {
            let quarantine_path = quarantine_file(path)?;
            Ok(ReadOutcome::Quarantined {
                moved_to: quarantine_path,
                reason: e.to_string(),
            })
        }
    }
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// This ensures that the file is either completely written or not modified at
/// all, preventing corruption on crashes or power failures.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), InventoryError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            InventoryError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory (important for atomic rename)
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| InventoryError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| InventoryError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| InventoryError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| InventoryError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        InventoryError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Move an unreadable file aside so it is preserved for manual inspection
fn quarantine_file(path: &Path) -> Result<PathBuf, InventoryError> {
    let quarantine_path = path.with_extension("json.corrupt");
    fs::rename(path, &quarantine_path).map_err(|e| {
        InventoryError::Storage(format!(
            "Failed to move corrupt file {} aside: {}",
            path.display(),
            e
        ))
    })?;
    Ok(quarantine_path)
}
