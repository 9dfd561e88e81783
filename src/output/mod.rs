// src/output/mod.rs

//! Renders parsed records for the command-line tool.

use crate::config::{Config, OutputFormat, OutputMode};
use crate::errors::Result;
use crate::parsed::ParsedUrl;
use log::debug;
use std::io::{self, Write};

#[cfg(feature = "json")]
pub mod json;
pub mod text;

#[cfg(feature = "json")]
pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Writes one parsed record in a particular format.
pub trait ResultFormatter {
    /// Writes `parsed`. `first` is `false` for every record after the first,
    /// letting formats that need one emit a separator.
    fn write_record(&self, parsed: &ParsedUrl, first: bool, writer: &mut dyn Write)
        -> io::Result<()>;
}

/// Writes every result according to the configured output mode.
pub fn write_results(results: &[ParsedUrl], config: &Config, writer: &mut dyn Write) -> Result<()> {
    debug!("Writing {} result(s) in mode {:?}", results.len(), config.mode);

    match config.mode {
        OutputMode::Silent => {}
        OutputMode::Rewrite(protocol) => {
            for parsed in results {
                // Invalid records keep their line so output stays aligned with input.
                writeln!(writer, "{}", parsed.format(protocol).unwrap_or_default())?;
            }
        }
        OutputMode::Fields(format) => {
            let formatter = formatter_for(format);
            for (i, parsed) in results.iter().enumerate() {
                formatter.write_record(parsed, i == 0, writer)?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

fn formatter_for(format: OutputFormat) -> Box<dyn ResultFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        #[cfg(feature = "json")]
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
