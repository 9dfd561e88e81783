//! Transport protocols a repository can be reached over.

use crate::errors::Error;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The live transport of a parsed URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Ssh,
    Https,
    Http,
    Git,
}

impl Protocol {
    /// All protocols, in the order `urls()` renders them.
    pub const ALL: [Protocol; 4] = [
        Protocol::Ssh,
        Protocol::Https,
        Protocol::Http,
        Protocol::Git,
    ];

    /// The scheme token of this protocol.
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Ssh => "ssh",
            Protocol::Https => "https",
            Protocol::Http => "http",
            Protocol::Git => "git",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = Error;

    /// Parses a protocol name, case-insensitively.
    ///
    /// # Examples
    /// ```
    /// use giturlparse::Protocol;
    ///
    /// assert_eq!("HTTPS".parse::<Protocol>().unwrap(), Protocol::Https);
    /// assert!("ftp".parse::<Protocol>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ssh" => Ok(Protocol::Ssh),
            "https" => Ok(Protocol::Https),
            "http" => Ok(Protocol::Http),
            "git" => Ok(Protocol::Git),
            _ => Err(Error::UnknownProtocol(s.to_string())),
        }
    }
}
