//! Commands produced from keyboard input.
//!
//! Key bindings map to a [`Command`]; the app executes commands without
//! looking at raw key events.

use crate::models::SourceKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global
    // =========================================================================
    /// Quit the application (Ctrl+C)
    Quit,
    /// Open the collection list of a corpus (F1 / F2)
    Browse(SourceKind),

    // =========================================================================
    // Query editing (home screen)
    // =========================================================================
    InsertChar(char),
    Backspace,
    /// Clear the query (Esc on the home screen)
    ClearInput,
    /// Submit the query (Enter)
    Submit,

    // =========================================================================
    // Lists and scrolling
    // =========================================================================
    MoveUp,
    MoveDown,
    /// Open the collection under the cursor
    Select,
    /// Go back one screen
    Back,
    ScrollUp(usize),
    ScrollDown(usize),
    ScrollPageUp,
    ScrollPageDown,

    // =========================================================================
    // Results overlay
    // =========================================================================
    CloseResults,

    /// Key consumed without effect
    Noop,
}

impl Command {
    /// Whether executing this command can change what is on screen.
    pub fn affects_view(&self) -> bool {
        !matches!(self, Command::Noop)
    }
}
