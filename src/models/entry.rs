//! Inventory entry model
//!
//! An entry is one resentment record: who it concerns, what happened, how it
//! affects the writer, and their own part in it. Entries are immutable once
//! created; the collection only grows by append and shrinks by delete.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::EntryId;

/// A single resentment record
///
/// Wire field names (`myPart`, `createdAt`) are fixed by the persisted
/// format; existing data files must keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Unique identifier
    pub id: EntryId,

    /// Who or what the resentment is at (person, institution, or principle)
    pub who: String,

    /// What happened (the cause)
    pub what: String,

    /// How it affects me (self-esteem, security, ambitions, relationships)
    #[serde(default)]
    pub affects: String,

    /// My part (where I was selfish, dishonest, self-seeking, or frightened)
    #[serde(default)]
    pub my_part: String,

    /// When the entry was created; set once, never updated
    pub created_at: DateTime<Utc>,
}

impl Entry {
    /// Build an entry from a validated draft, generating id and timestamp
    pub fn from_draft(draft: EntryDraft) -> Result<Self, EntryValidationError> {
        draft.validate()?;
        Ok(Self {
            id: EntryId::new(),
            who: draft.who.trim().to_string(),
            what: draft.what.trim().to_string(),
            affects: draft.affects.trim().to_string(),
            my_part: draft.my_part.trim().to_string(),
            created_at: Utc::now(),
        })
    }

    /// Check the persisted-entry invariant: who and what are non-empty
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.who.trim().is_empty() {
            return Err(EntryValidationError::MissingWho);
        }
        if self.what.trim().is_empty() {
            return Err(EntryValidationError::MissingWhat);
        }
        Ok(())
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.who, self.what)
    }
}

/// User-entered field values that have not been validated yet
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub who: String,
    pub what: String,
    pub affects: String,
    pub my_part: String,
}

impl EntryDraft {
    /// Create a draft with the two required fields
    pub fn new(who: impl Into<String>, what: impl Into<String>) -> Self {
        Self {
            who: who.into(),
            what: what.into(),
            ..Default::default()
        }
    }

    /// Set the "how it affects me" field
    pub fn affects(mut self, affects: impl Into<String>) -> Self {
        self.affects = affects.into();
        self
    }

    /// Set the "my part" field
    pub fn my_part(mut self, my_part: impl Into<String>) -> Self {
        self.my_part = my_part.into();
        self
    }

    /// Validate required fields
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.who.trim().is_empty() {
            return Err(EntryValidationError::MissingWho);
        }
        if self.what.trim().is_empty() {
            return Err(EntryValidationError::MissingWhat);
        }
        Ok(())
    }
}

/// Validation errors for entry drafts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    MissingWho,
    MissingWhat,
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingWho => write!(f, "'Who or what am I resentful at?' is required"),
            Self::MissingWhat => write!(f, "'What happened?' is required"),
        }
    }
}

impl std::error::Error for EntryValidationError {}
