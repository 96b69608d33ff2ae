//! Word store loading utilities
//!
//! Reads word lists in the JSON layout used by the web version of the game:
//! an array of `{ "word", "gender", "translation", "plural", "hint" }` objects.

use super::{StoreError, WordStore};
use crate::core::WordEntry;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct WordRecord {
    word: String,
    gender: String,
    translation: String,
    plural: String,
    #[serde(default)]
    hint: String,
}

/// Load a store from a JSON file
///
/// # Errors
///
/// Returns `StoreError` if the file cannot be read, is not valid JSON, holds
/// an entry that could never be guessed, or is empty.
///
/// # Examples
/// ```no_run
/// use hangman_de::store::loader::load_from_file;
///
/// let store = load_from_file("words.json").unwrap();
/// println!("Loaded {} words", store.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordStore, StoreError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let store = parse_json(&content)?;
    log::info!("loaded {} words from {}", store.len(), path.display());
    Ok(store)
}

/// Parse a store from JSON text
///
/// # Errors
///
/// See [`load_from_file`].
pub fn parse_json(json: &str) -> Result<WordStore, StoreError> {
    let records: Vec<WordRecord> = serde_json::from_str(json)?;

    let entries = records
        .into_iter()
        .enumerate()
        .map(|(index, r)| {
            WordEntry::new(r.word, r.gender, r.translation, r.plural, r.hint)
                .map_err(|source| StoreError::Entry { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    WordStore::new(entries)
}

/// Convert the embedded table rows into entries
///
/// # Errors
///
/// Returns `StoreError::Entry` for the first row that is not a valid entry.
pub fn entries_from_table(
    table: &[(&str, &str, &str, &str, &str)],
) -> Result<Vec<WordEntry>, StoreError> {
    table
        .iter()
        .enumerate()
        .map(|(index, &(word, gender, translation, plural, hint))| {
            WordEntry::new(word, gender, translation, plural, hint)
                .map_err(|source| StoreError::Entry { index, source })
        })
        .collect()
}
