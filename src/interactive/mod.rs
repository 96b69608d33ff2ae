//! Interactive TUI interface
//!
//! Full-screen game and word list views on top of ratatui and crossterm.

mod app;
mod rendering;
mod terminal;

pub use app::{App, GameView, View, WordListView, run_tui};
pub use rendering::ui;
pub use terminal::TerminalSession;
