//! Terminal session guard
//!
//! Raw mode and the alternate screen are held for the lifetime of a
//! [`TerminalSession`] and released in `Drop`, so an early `?` return from the
//! event loop still leaves the shell usable.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};

pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    /// Switch the terminal into raw mode on the alternate screen
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be configured; anything already
    /// changed is rolled back first.
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            restore();
            return Err(e.into());
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => {
                log::debug!("terminal session started");
                Ok(Self { terminal })
            }
            Err(e) => {
                restore();
                Err(e.into())
            }
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore();
        if let Err(e) = self.terminal.show_cursor() {
            log::warn!("failed to show cursor: {e}");
        }
        log::debug!("terminal session ended");
    }
}

fn restore() {
    if let Err(e) = disable_raw_mode() {
        log::warn!("failed to disable raw mode: {e}");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
        log::warn!("failed to leave alternate screen: {e}");
    }
}
