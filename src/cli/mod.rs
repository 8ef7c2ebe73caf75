//! Command-line interface: argument parsing and the non-TUI commands.
//!
//! Call [`run_info_command`] before loading configuration, then
//! [`run_cli_command`]; the latter returns `None` when the TUI should start.
//!
//! ```ignore
//! use qh_search::cli::{parse_args, run_cli_command, run_info_command};
//!
//! let args = parse_args(std::env::args())?;
//! if let Some(result) = run_info_command(&args.command) {
//!     return result;
//! }
//! let config = args.apply(AppConfig::from_env()?);
//! if let Some(result) = run_cli_command(&args.command, &config) {
//!     return result;
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod search;
pub mod version;

pub use args::{parse_args, CliArgs, CliCommand};
pub use search::{handle_search_command, run_search};
pub use version::{handle_help_command, handle_version_command, VERSION};

use color_eyre::Result;

/// Run `--version` or `--help`. These never read the environment, so a bad
/// `QH_*` value cannot break them.
pub fn run_info_command(command: &CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            handle_version_command();
            Some(Ok(()))
        }
        CliCommand::Help => {
            handle_help_command();
            Some(Ok(()))
        }
        CliCommand::Search(_) | CliCommand::RunTui => None,
    }
}

/// Run a non-TUI command.
///
/// Returns `None` for [`CliCommand::RunTui`].
pub fn run_cli_command(command: &CliCommand, config: &crate::startup::AppConfig) -> Option<Result<()>> {
    match command {
        CliCommand::Search(text) => Some(handle_search_command(config, text)),
        CliCommand::RunTui => None,
        CliCommand::Version | CliCommand::Help => run_info_command(command),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::startup::AppConfig;

    #[test]
    fn test_run_tui_returns_none() {
        assert!(run_cli_command(&CliCommand::RunTui, &AppConfig::default()).is_none());
    }

    #[test]
    fn test_version_returns_ok() {
        let result = run_cli_command(&CliCommand::Version, &AppConfig::default());
        assert!(matches!(result, Some(Ok(()))));
    }

    #[test]
    fn test_info_commands_need_no_config() {
        assert!(matches!(run_info_command(&CliCommand::Version), Some(Ok(()))));
        assert!(matches!(run_info_command(&CliCommand::Help), Some(Ok(()))));
        assert!(run_info_command(&CliCommand::Search("mercy".to_string())).is_none());
        assert!(run_info_command(&CliCommand::RunTui).is_none());
    }
}
