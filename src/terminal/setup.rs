//! Low-level enter/leave functions used by `TerminalManager` and the panic hook.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Switch to the alternate screen so the original content is preserved.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen)
}

/// Leave the alternate screen, disable raw mode and show the cursor.
///
/// Never fails; safe to call more than once.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, LeaveAlternateScreen);
    let _ = writer.flush();
    let _ = execute!(writer, Show);
}

/// Restore stdout after a panic, ignoring every error.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
