//! Terminal management with RAII cleanup.
//!
//! `TerminalManager` puts the terminal into raw mode on the alternate screen
//! and restores it when dropped, whether the app exits normally or unwinds.
//!
//! ```no_run
//! use qh_search::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> color_eyre::Result<()> {
//!     setup_panic_hook();
//!     let mut manager = TerminalManager::new()?;
//!     let _terminal = manager.terminal();
//!     // Terminal is restored when `manager` is dropped
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// Restores the terminal on drop. Created by `TerminalManager`.
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    /// Restore the terminal. Subsequent calls are no-ops.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }

    pub fn is_cleaned_up(&self) -> bool {
        self.cleaned_up
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the ratatui terminal for the lifetime of the TUI.
///
/// Install [`setup_panic_hook`] before creating the manager so that a panic
/// also leaves the terminal usable.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enable raw mode, enter the alternate screen and clear it.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout)?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        tracing::debug!("Terminal entered TUI mode");
        Ok(Self {
            terminal,
            guard: TerminalGuard::new(),
        })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    pub fn size(&self) -> Result<ratatui::prelude::Rect> {
        Ok(self.terminal.size()?.into())
    }

    /// Restore the terminal before the manager is dropped.
    pub fn restore(&mut self) -> Result<()> {
        self.guard.cleanup();
        self.terminal.show_cursor()?;
        tracing::debug!("Terminal restored");
        Ok(())
    }
}
