//! Defines the `Config` struct that drives the command-line tool.
//!
//! The library entry points take no configuration: parsing is governed by the
//! static platform registry alone. This module turns the parsed CLI arguments
//! into a validated, structured description of what the binary should print.

use crate::cli::Cli;
use crate::errors::Error;
use crate::protocol::Protocol;

mod validation;

/// How parsed records are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `field: value` line per field.
    Text,
    /// One JSON object per line.
    #[cfg(feature = "json")]
    Json,
}

/// What the tool prints for each URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// The parsed fields, in the given format.
    Fields(OutputFormat),
    /// The URL rewritten as a clone URL for the given protocol.
    Rewrite(Protocol),
    /// Nothing; only the exit status is meaningful.
    Silent,
}

/// Validated configuration for a run of the command-line tool.
#[derive(Debug, Clone)]
pub struct Config {
    /// URLs to parse, in the order given.
    pub urls: Vec<String>,
    pub mode: OutputMode,
    /// Fail the run when any URL is invalid.
    pub strict: bool,
}

impl TryFrom<Cli> for Config {
    type Error = Error;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        validation::validate_cli_options(&cli)?;

        let mode = if cli.quiet {
            OutputMode::Silent
        } else if let Some(protocol) = &cli.format {
            OutputMode::Rewrite(protocol.parse()?)
        } else {
            OutputMode::Fields(output_format(&cli))
        };

        Ok(Config {
            urls: cli.urls,
            mode,
            strict: cli.strict || cli.quiet,
        })
    }
}

#[cfg(feature = "json")]
fn output_format(cli: &Cli) -> OutputFormat {
    if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    }
}

#[cfg(not(feature = "json"))]
fn output_format(_cli: &Cli) -> OutputFormat {
    OutputFormat::Text
}
