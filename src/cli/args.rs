//! Command-line argument parsing.

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::startup::AppConfig;

/// What the process should do.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run one search and print the results to stdout
    Search(String),
    /// Run the TUI application (default)
    RunTui,
}

/// Parsed command plus the configuration overrides given as flags.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub command: CliCommand,
    pub url: Option<String>,
    pub quran: Option<PathBuf>,
    pub hadith: Option<PathBuf>,
}

impl CliArgs {
    /// Apply flag overrides on top of `config`.
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(url) = &self.url {
            config = config.with_search_url(url.clone());
        }
        if let Some(path) = &self.quran {
            config = config.with_quran_dataset(path.clone());
        }
        if let Some(path) = &self.hadith {
            config = config.with_hadith_dataset(path.clone());
        }
        config
    }
}

pub const USAGE: &str = "\
Usage: qh-search [OPTIONS]

Options:
  --search <TEXT>   Run one search and print the results
  --url <URL>       Retrieval service base URL (env: QH_SEARCH_URL)
  --quran <PATH>    Quran dataset JSON (env: QH_QURAN_DATASET)
  --hadith <PATH>   Hadith dataset JSON (env: QH_HADITH_DATASET)
  -V, --version     Print version
  -h, --help        Print this help

Without --search the interactive TUI starts.";

/// Parse command-line arguments. The first item is the program name.
///
/// Flags taking a value accept both `--flag value` and `--flag=value`.
/// Unknown arguments are ignored.
///
/// ```
/// use qh_search::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["qh-search".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap().command, CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliArgs, ConfigError>
where
    I: Iterator<Item = String>,
{
    let mut parsed = CliArgs {
        command: CliCommand::RunTui,
        url: None,
        quran: None,
        hadith: None,
    };
    let mut search = None;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg, None),
        };

        match flag.as_str() {
            "--version" | "-V" => return Ok(CliArgs { command: CliCommand::Version, ..parsed }),
            "--help" | "-h" => return Ok(CliArgs { command: CliCommand::Help, ..parsed }),
            "--search" => search = Some(take_value(&flag, inline, &mut args)?),
            "--url" => parsed.url = Some(take_value(&flag, inline, &mut args)?),
            "--quran" => parsed.quran = Some(take_value(&flag, inline, &mut args)?.into()),
            "--hadith" => parsed.hadith = Some(take_value(&flag, inline, &mut args)?.into()),
            _ => {}
        }
    }

    if let Some(text) = search {
        if text.trim().is_empty() {
            return Err(ConfigError::invalid("--search", "query text is empty"));
        }
        parsed.command = CliCommand::Search(text);
    }
    Ok(parsed)
}

fn take_value<I>(flag: &str, inline: Option<String>, rest: &mut I) -> Result<String, ConfigError>
where
    I: Iterator<Item = String>,
{
    inline
        .or_else(|| rest.next())
        .ok_or_else(|| ConfigError::MissingValue {
            flag: flag.to_string(),
        })
}
