//! Word store
//!
//! The read-only list of vocabulary entries a round draws its target from.
//! Loaded once at startup, either from the embedded table or a JSON file.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::{EntryError, RandomSource, WordEntry};
use std::fmt;
use std::io;
use std::path::PathBuf;

/// A non-empty, ordered collection of entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordStore {
    entries: Vec<WordEntry>,
}

/// Error type for word store loading
#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: io::Error },
    Json(serde_json::Error),
    Entry { index: usize, source: EntryError },
    Empty,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read word list {}: {source}", path.display())
            }
            Self::Json(e) => write!(f, "Malformed word list: {e}"),
            Self::Entry { index, source } => write!(f, "Entry {index}: {source}"),
            Self::Empty => write!(f, "Word list contains no entries"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(e) => Some(e),
            Self::Entry { source, .. } => Some(source),
            Self::Empty => None,
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl WordStore {
    /// Build a store from entries
    ///
    /// # Errors
    /// Returns `StoreError::Empty` if `entries` is empty.
    pub fn new(entries: Vec<WordEntry>) -> Result<Self, StoreError> {
        if entries.is_empty() {
            return Err(StoreError::Empty);
        }
        Ok(Self { entries })
    }

    /// The store compiled into the binary
    ///
    /// # Errors
    /// Returns `StoreError` if the embedded table holds an unguessable word.
    pub fn embedded() -> Result<Self, StoreError> {
        let entries = loader::entries_from_table(WORDS)?;
        Self::new(entries)
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true for a constructed store
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordEntry> {
        self.entries.iter()
    }

    /// Pick an entry uniformly at random
    pub fn pick<R: RandomSource + ?Sized>(&self, rng: &mut R) -> &WordEntry {
        let index = rng.pick_index(self.entries.len()).min(self.entries.len() - 1);
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a WordStore {
    type Item = &'a WordEntry;
    type IntoIter = std::slice::Iter<'a, WordEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
