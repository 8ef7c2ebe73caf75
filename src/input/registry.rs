//! Command registry for dispatching keyboard input to commands.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::command::Command;
use super::context::{InputContext, Screen};
use super::keybindings::{KeyCombo, KeybindingConfig};

/// Maps key events to commands.
///
/// Priority:
/// 1. Overlay bindings, when the results overlay is open (plus Ctrl+C)
/// 2. Global bindings (Ctrl+C, F1, F2)
/// 3. Screen bindings
/// 4. Character input on the home screen
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    /// Returns `None` for keys that should be ignored entirely.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        // Some terminals report Shift on uppercase letters; bindings ignore it.
        let modifiers = key.modifiers.difference(KeyModifiers::SHIFT);
        let combo = KeyCombo::new(key.code, modifiers);

        if context.overlay_open {
            // Only quitting gets past the overlay.
            let cmd = match self.config.get_global(&combo) {
                Some(Command::Quit) => Command::Quit,
                _ => self
                    .config
                    .get_overlay(&combo)
                    .cloned()
                    .unwrap_or(Command::Noop),
            };
            return Some(cmd);
        }

        if let Some(cmd) = self.config.get_global(&combo) {
            return Some(cmd.clone());
        }

        if let Some(cmd) = self.config.get_screen(context.screen, &combo) {
            return Some(cmd.clone());
        }

        match (context.screen, key.code) {
            (Screen::Home, KeyCode::Char(c))
                if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(Command::InsertChar(c))
            }
            _ => None,
        }
    }
}
