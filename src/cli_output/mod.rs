//! Plain-text output for the one-shot `--search` command.

mod boxes;

pub use boxes::*;
