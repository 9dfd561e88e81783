//! Defines the error types of the crate.
//!
//! Parsing itself never fails: an unrecognized URL is reported through
//! [`ParsedUrl::valid`](crate::ParsedUrl::valid). The `Error` enum covers the
//! fallible conveniences built on top of it (strict parsing, URL rewriting)
//! and the command-line surface.

use thiserror::Error;

/// Errors used throughout `giturlparse`.
#[derive(Error, Debug)]
pub enum Error {
    /// The input did not resolve to both an owner and a repository.
    #[error("Not a recognized git repository URL: '{url}'")]
    InvalidUrl {
        /// The input as given to the parser (trimmed).
        url: String,
    },

    /// A protocol name that is not one of `ssh`, `https`, `http` or `git`.
    #[error("Unknown protocol '{0}' (expected one of: ssh, https, http, git)")]
    UnknownProtocol(String),

    /// The platform of the parsed URL does not serve the requested protocol.
    #[error("Platform '{platform}' does not support the '{protocol}' protocol")]
    UnsupportedProtocol {
        /// Identifier of the platform the URL resolved to.
        platform: String,
        /// The requested protocol.
        protocol: String,
    },

    /// Invalid combination of command-line options.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Failure while writing results.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for `giturlparse` operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_invalid_url_message_contains_input() {
        let err = Error::InvalidUrl {
            url: "git@github.com:Org".to_string(),
        };
        assert!(err.to_string().contains("git@github.com:Org"));
    }

    #[test]
    fn test_io_error_conversion() {
        let source = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = source.into();
        match err {
            Error::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::BrokenPipe),
            _ => panic!("Expected Error::Io"),
        }
    }
}
