//! Vocabulary entry representation
//!
//! A `WordEntry` is one row of the word store: the headword plus its article,
//! English translation, plural form and a hint shown late in a round.

use super::alphabet::Letter;
use rustc_hash::FxHashSet;
use std::fmt;

/// An immutable vocabulary entry
///
/// Keeps the headword's folded letters by position and as a set, so
/// membership checks during a round never re-fold the word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: String,
    gender: String,
    translation: String,
    plural: String,
    hint: String,
    folded: Vec<Letter>,
    letters: FxHashSet<Letter>,
}

/// Error type for entries that could never be guessed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    EmptyWord,
    InvalidCharacter { word: String, character: char },
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWord => write!(f, "Word must not be empty"),
            Self::InvalidCharacter { word, character } => {
                write!(f, "Word '{word}' contains '{character}', which cannot be guessed")
            }
        }
    }
}

impl std::error::Error for EntryError {}

impl WordEntry {
    /// Create a new entry
    ///
    /// # Errors
    /// Returns `EntryError` if the headword is empty or contains a character
    /// that does not fold into the guessing alphabet.
    ///
    /// # Examples
    /// ```
    /// use hangman_de::core::WordEntry;
    ///
    /// let entry = WordEntry::new("Stern", "der", "star", "Sterne", "Er leuchtet.").unwrap();
    /// assert_eq!(entry.word(), "Stern");
    /// assert_eq!(entry.letter_count(), 5);
    ///
    /// assert!(WordEntry::new("", "der", "-", "-", "").is_err());
    /// assert!(WordEntry::new("Weihnachts-Baum", "der", "-", "-", "").is_err());
    /// ```
    pub fn new(
        word: impl Into<String>,
        gender: impl Into<String>,
        translation: impl Into<String>,
        plural: impl Into<String>,
        hint: impl Into<String>,
    ) -> Result<Self, EntryError> {
        let word = word.into();
        if word.is_empty() {
            return Err(EntryError::EmptyWord);
        }

        let folded = word
            .chars()
            .map(|c| {
                Letter::from_char(c).ok_or_else(|| EntryError::InvalidCharacter {
                    word: word.clone(),
                    character: c,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let letters = folded.iter().copied().collect();

        Ok(Self {
            word,
            gender: gender.into(),
            translation: translation.into(),
            plural: plural.into(),
            hint: hint.into(),
            folded,
            letters,
        })
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Grammatical gender, given as the definite article
    #[inline]
    #[must_use]
    pub fn gender(&self) -> &str {
        &self.gender
    }

    #[inline]
    #[must_use]
    pub fn translation(&self) -> &str {
        &self.translation
    }

    #[inline]
    #[must_use]
    pub fn plural(&self) -> &str {
        &self.plural
    }

    #[inline]
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Number of characters in the headword
    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.folded.len()
    }

    /// Folded letter at a character position
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<Letter> {
        self.folded.get(position).copied()
    }

    /// Check whether the headword contains a letter, ignoring case
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    /// Distinct folded letters of the headword
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &FxHashSet<Letter> {
        &self.letters
    }

    /// Headword characters paired with their folded letters
    pub fn chars(&self) -> impl Iterator<Item = (char, Letter)> + '_ {
        self.word.chars().zip(self.folded.iter().copied())
    }

    /// Headword prefixed with its article, e.g. "der Stern"
    #[must_use]
    pub fn with_article(&self) -> String {
        if self.gender.is_empty() {
            self.word.clone()
        } else {
            format!("{} {}", self.gender, self.word)
        }
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}
