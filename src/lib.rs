//! German vocabulary hangman
//!
//! A hangman game over a list of German nouns with article, translation and
//! plural, plus a viewer for that list.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_de::core::{GameState, Letter, WordEntry};
//!
//! let target = WordEntry::new("Stern", "der", "star", "Sterne", "Er leuchtet oben.").unwrap();
//! let mut state = GameState::new(target);
//!
//! for c in "txyern".chars() {
//!     state.apply_guess(Letter::from_char(c).unwrap());
//! }
//! assert_eq!(state.wrong_count(), 2);
//! assert_eq!(state.masked(), "_tern");
//! ```

// Core domain types
pub mod core;

// Word store
pub mod store;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
