// src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use giturlparse::cli::Cli;
use giturlparse::config::Config;
use giturlparse::output::write_results;
use giturlparse::{parse, ParsedUrl};
use std::io::{self, BufRead, IsTerminal};

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "giturlparse=debug".parse()?
                } else {
                    "giturlparse=info".parse()?
                },
            ),
        )
        .init();

    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    let mut cli = Cli::parse();

    // Without positional URLs, read one URL per line from piped stdin.
    if cli.urls.is_empty() && !io::stdin().is_terminal() {
        cli.urls = read_urls(io::stdin().lock()).context("Failed to read URLs from stdin")?;
    }

    // --- Configuration & Execution ---
    let config = Config::try_from(cli)?;
    log::debug!("Configuration built successfully: {:?}", config);

    let results: Vec<ParsedUrl> = config.urls.iter().map(|url| parse(url)).collect();
    let invalid = results.iter().filter(|parsed| !parsed.valid()).count();

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    write_results(&results, &config, &mut writer)?;

    // --- Error Handling ---
    if config.strict && invalid > 0 {
        for parsed in results.iter().filter(|parsed| !parsed.valid()) {
            log::info!("Not a recognized repository URL: '{}'", parsed.url());
        }
        eprintln!(
            "giturlparse: {} of {} URL(s) not recognized.",
            invalid,
            results.len()
        );
        std::process::exit(1);
    }

    Ok(())
}

/// Collects non-blank lines as URLs.
fn read_urls(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut urls = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            urls.push(trimmed.to_string());
        }
    }
    Ok(urls)
}
