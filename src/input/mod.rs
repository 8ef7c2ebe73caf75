//! Keyboard input handling.
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> App::execute()
//! ```

pub mod command;
pub mod context;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::{InputContext, Screen};
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;
