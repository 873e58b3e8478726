//! Command-line parsing and runtime configuration.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;

use crate::error::ConfigError;

/// Selects the output presenter.
pub const FORMAT_ENV: &str = "STATLS_FORMAT";
/// Caps simultaneous metadata queries.
pub const MAX_IN_FLIGHT_ENV: &str = "STATLS_MAX_IN_FLIGHT";
/// Disables terminal highlighting when set to a non-empty value.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// List a directory, highlighting everything that is not a regular file.
#[derive(Parser, Debug)]
#[command(name = "statls", version, about)]
pub struct Cli {
    /// Directory to list. Defaults to the current working directory.
    pub path: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Fully resolved settings for one invocation.
#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub directory: PathBuf,
    pub format: OutputFormat,
    /// Whether non-file entries get terminal escape styling.
    pub highlight: bool,
    pub max_in_flight: Option<NonZeroUsize>,
}

impl Config {
    /// Builds the configuration from parsed arguments and an environment
    /// lookup.
    ///
    /// Highlighting is only enabled when stdout is a terminal and
    /// `NO_COLOR` is unset or empty.
    ///
    /// # Errors
    /// Returns an error when `STATLS_FORMAT` or `STATLS_MAX_IN_FLIGHT`
    /// hold unsupported values.
    pub fn resolve(
        cli: Cli,
        env: impl Fn(&str) -> Option<String>,
        stdout_is_terminal: bool,
    ) -> Result<Self, ConfigError> {
        let directory = cli.path.unwrap_or_else(|| {
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        });
        let format = parse_format(env(FORMAT_ENV))?;
        let max_in_flight = parse_max_in_flight(env(MAX_IN_FLIGHT_ENV))?;
        let no_color = env(NO_COLOR_ENV).is_some_and(|value| !value.is_empty());

        Ok(Self {
            directory,
            format,
            highlight: stdout_is_terminal && !no_color,
            max_in_flight,
        })
    }
}

fn parse_format(value: Option<String>) -> Result<OutputFormat, ConfigError> {
    let Some(value) = value else {
        return Ok(OutputFormat::Text);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "" | "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        _ => Err(ConfigError::UnknownFormat {
            variable: FORMAT_ENV,
            value,
        }),
    }
}

fn parse_max_in_flight(value: Option<String>) -> Result<Option<NonZeroUsize>, ConfigError> {
    let Some(value) = value else {
        return Ok(None);
    };
    if value.trim().is_empty() {
        return Ok(None);
    }

    value
        .trim()
        .parse::<NonZeroUsize>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidLimit {
            variable: MAX_IN_FLIGHT_ENV,
            value,
        })
}
