//! Core domain types for the hangman game
//!
//! Everything in here is pure: no terminal, no files, no global state.
//! Randomness enters only through [`RandomSource`].

mod alphabet;
mod entry;
mod game;
mod random;

pub use alphabet::{ALPHABET, Letter, fold};
pub use entry::{EntryError, WordEntry};
pub use game::{GameState, GuessOutcome, HINT_THRESHOLD, MAX_WRONG_GUESSES, PLACEHOLDER, Status};
pub use random::{RandomSource, ScriptedRandom};
