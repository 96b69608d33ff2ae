//! The fixed German guessing alphabet

use std::fmt;

/// Every letter that can be guessed, in button order
pub const ALPHABET: [char; 30] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', 'ä', 'ö', 'ü', 'ß',
];

/// Case-fold a single character
///
/// Returns `None` when the lowercase form is not exactly one character.
#[must_use]
pub fn fold(c: char) -> Option<char> {
    let mut lower = c.to_lowercase();
    let first = lower.next()?;
    lower.next().is_none().then_some(first)
}

/// A single, already case-folded member of [`ALPHABET`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(char);

impl Letter {
    /// Parse a character into a letter, folding case first
    ///
    /// # Examples
    /// ```
    /// use hangman_de::core::Letter;
    ///
    /// assert_eq!(Letter::from_char('Ü').unwrap().as_char(), 'ü');
    /// assert_eq!(Letter::from_char('ẞ').unwrap().as_char(), 'ß');
    /// assert!(Letter::from_char('1').is_none());
    /// assert!(Letter::from_char('é').is_none());
    /// ```
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        let folded = fold(c)?;
        ALPHABET.contains(&folded).then_some(Self(folded))
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Position of this letter in [`ALPHABET`]
    #[must_use]
    pub fn index(self) -> usize {
        ALPHABET
            .iter()
            .position(|&c| c == self.0)
            .unwrap_or_default()
    }

    /// Letter at a button position, if any
    #[must_use]
    pub fn at(index: usize) -> Option<Self> {
        ALPHABET.get(index).copied().map(Self)
    }

    /// All letters in button order
    pub fn all() -> impl Iterator<Item = Self> {
        ALPHABET.iter().copied().map(Self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
