//! Terminal output formatting
//!
//! Display utilities for the line-based modes and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_simulation_result, print_word_list};
