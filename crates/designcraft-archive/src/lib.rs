//! Persistent archive of generated components.
//!
//! The archive is an ordered sequence of [`ArchivedEntry`] values serialized
//! as one JSON array under a fixed key-value storage key. Loading is
//! fail-soft: a missing or malformed payload yields an empty archive rather
//! than an error. Every write serializes the whole collection; entries are
//! never mutated or deleted.

use designcraft_core::CodeBundle;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage key the archive payload lives under.
pub const STORAGE_KEY: &str = "designCraftDocs";

/// Result type alias for archive operations.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Errors that can occur when persisting the archive.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// Archive serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// One archived generation.
///
/// Serialized schema:
/// `{id: number, prompt: string, codes: {html, css, js}, date: string}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchivedEntry {
    /// Millisecond timestamp taken at archive time.
    pub id: u64,
    /// The prompt the component was generated from.
    pub prompt: String,
    /// Always the semantic-style bundle; the utility variant is
    /// illustrative and never archived.
    pub codes: CodeBundle,
    /// Localized date string, e.g. "04/08/2026".
    pub date: String,
}

impl ArchivedEntry {
    /// Create an entry from its parts.
    pub fn new(
        id: u64,
        prompt: impl Into<String>,
        codes: CodeBundle,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            codes,
            date: date.into(),
        }
    }
}

/// The ordered archive collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveStore {
    entries: Vec<ArchivedEntry>,
}

impl ArchiveStore {
    /// Create an empty archive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an archive from a persisted payload.
    ///
    /// Fail-soft: `None` or a payload that does not parse as the expected
    /// array yields an empty archive, never an error.
    pub fn from_json(payload: Option<&str>) -> Self {
        let entries = payload
            .and_then(|json| serde_json::from_str(json).ok())
            .unwrap_or_default();
        Self { entries }
    }

    /// Serialize the whole collection for persistence.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    /// Append an entry. Entries are never reordered.
    pub fn push(&mut self, entry: ArchivedEntry) {
        self.entries.push(entry);
    }

    /// Iterate over entries in archive order.
    pub fn iter(&self) -> impl Iterator<Item = &ArchivedEntry> {
        self.entries.iter()
    }

    /// All entries in archive order.
    pub fn entries(&self) -> &[ArchivedEntry] {
        &self.entries
    }

    /// Number of archived entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the archive is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
