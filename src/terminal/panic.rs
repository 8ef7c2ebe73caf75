//! Panic hook that leaves the terminal usable.

use super::setup::emergency_restore;
use std::panic;

/// Install a hook that restores the terminal, then runs the previous hook
/// so the panic message is still printed.
///
/// Call early in `main`, before creating the `TerminalManager`.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_panic_hook_does_not_panic() {
        setup_panic_hook();
        // Back to the default hook so other tests are unaffected
        let _ = panic::take_hook();
    }
}
