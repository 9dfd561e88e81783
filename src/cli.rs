// src/cli.rs

use clap::Parser;

/// Parses git repository URLs into their components.
///
/// Each URL (SSH shorthand, ssh://, git://, http(s):// or git+https://) is
/// decomposed into host, port, user, owner, nested groups, repository,
/// branch and file path, and the hosting platform is identified.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// One or more repository URLs to parse.
    #[arg(value_name = "URL", num_args = 0..)]
    pub urls: Vec<String>,

    #[cfg(feature = "json")]
    /// Print each parsed record as a JSON object (one per line).
    #[arg(short = 'j', long, action = clap::ArgAction::SetTrue)]
    pub json: bool,

    /// Instead of listing fields, rewrite each URL as a clone URL for this protocol (ssh, https, http, git).
    #[arg(short = 'f', long = "format", value_name = "PROTOCOL")]
    pub format: Option<String>,

    /// Exit with a non-zero status if any URL is not a recognized repository URL.
    #[arg(short = 's', long, action = clap::ArgAction::SetTrue)]
    pub strict: bool,

    /// Print nothing; report validity through the exit status only (implies --strict).
    #[arg(short = 'q', long, action = clap::ArgAction::SetTrue)]
    pub quiet: bool,
}
