//! Protocol matchers: one total function per URL shape family.
//!
//! Each matcher either recognizes the structure of its shape and returns the
//! raw components (scheme tokens, user, host, port, pathname) or returns
//! `None`. The shapes have distinct delimiter signatures, so at most one of them
//! can match a given string and [`match_url`] simply returns the first hit.

use crate::platform;
use crate::protocol::Protocol;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// The URL shape family a string was recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `user@host:path` (scp-like syntax, no scheme).
    SshShorthand,
    /// `ssh://[user@]host[:port]/path`, optionally `git+ssh://`.
    SshUrl,
    /// `git://host[:port]/path`.
    GitUrl,
    /// `http(s)://[user@]host[:port]/path`, optionally `git+http(s)://`.
    HttpUrl,
}

/// Raw capture groups produced by a matcher, borrowed from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch<'a> {
    pub shape: Shape,
    /// Scheme tokens in left-to-right order, lowercased. Empty for the shorthand.
    pub protocols: Vec<String>,
    pub user: Option<&'a str>,
    pub host: &'a str,
    pub port: Option<&'a str>,
    /// The path exactly as delimited in the input, trailer included.
    pub pathname: &'a str,
}

impl RawMatch<'_> {
    /// The transport used to reach the host.
    pub fn protocol(&self) -> Protocol {
        match self.shape {
            Shape::SshShorthand | Shape::SshUrl => Protocol::Ssh,
            Shape::GitUrl => Protocol::Git,
            Shape::HttpUrl => match self.protocols.last().map(String::as_str) {
                Some("http") => Protocol::Http,
                _ => Protocol::Https,
            },
        }
    }
}

/// `user@host:rest`. The user is mandatory and may not contain `:` or `/`,
/// which keeps scheme URLs and local paths out of this shape. A query string
/// or fragment is matched and dropped.
static SSH_SHORTHAND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<user>[^@/:\s]+)@(?P<host>[^@/:?#\s]+):(?P<rest>[^?#]*)(?:[?#].*)?$").unwrap()
});

/// A port written before a second colon: `9999:Org/Repo.git`.
static SHORTHAND_COLON_PORT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<port>[0-9]+):(?P<pathname>.*)$").unwrap());

/// A port directly after the shorthand colon: `9999/Org/Repo.git`.
static SHORTHAND_SLASH_PORT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<port>[0-9]+)(?P<pathname>/.*)$").unwrap());

static SSH_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<scheme>(?i:(?:git\+)?ssh))://(?:(?P<user>[^@/:\s]+)@)?(?P<host>[^@/:?#\s]+)(?::(?P<port>[0-9]+))?(?P<pathname>/[^?#]*)?(?:[?#].*)?$",
    )
    .unwrap()
});

static GIT_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<scheme>(?i:git))://(?:(?P<user>[^@/:\s]+)@)?(?P<host>[^@/:?#\s]+)(?::(?P<port>[0-9]+))?(?P<pathname>/[^?#]*)?(?:[?#].*)?$",
    )
    .unwrap()
});

/// The optional `:password` part of the userinfo is matched but never captured.
static HTTP_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<scheme>(?i:(?:git\+)?https?))://(?:(?P<user>[^@/:\s]+)(?::[^@/\s]*)?@)?(?P<host>[^@/:?#\s]+)(?::(?P<port>[0-9]+))?(?P<pathname>/[^?#]*)?(?:[?#].*)?$",
    )
    .unwrap()
});

type Matcher = for<'a> fn(&'a str) -> Option<RawMatch<'a>>;

/// Matchers in priority order.
const MATCHERS: [Matcher; 4] = [match_ssh_shorthand, match_ssh_url, match_git_url, match_http_url];

/// Runs the matchers in priority order and returns the first match.
///
/// # Examples
/// ```
/// use giturlparse::matcher::{match_url, Shape};
///
/// let raw = match_url("git@host.org:9999/Org/Repo.git").unwrap();
/// assert_eq!(raw.shape, Shape::SshShorthand);
/// assert_eq!(raw.port, Some("9999"));
/// assert_eq!(raw.pathname, "/Org/Repo.git");
///
/// assert!(match_url("/local/path/to/repo").is_none());
/// ```
pub fn match_url(input: &str) -> Option<RawMatch<'_>> {
    let raw = MATCHERS.iter().find_map(|matcher| matcher(input));
    match &raw {
        Some(raw) => log::debug!("'{}' matched shape {:?}", input, raw.shape),
        None => log::debug!("'{}' matched no known URL shape", input),
    }
    raw
}

/// Matches `user@host:path`, `user@host:port:path` and `user@host:port/path`.
///
/// Digits followed by `/` are only a port when the host's platform serves SSH
/// on custom ports and the remainder still holds owner and repo; otherwise
/// they are a numeric owner.
pub fn match_ssh_shorthand(input: &str) -> Option<RawMatch<'_>> {
    let caps = SSH_SHORTHAND_RE.captures(input)?;
    let host = caps.name("host").map_or("", |m| m.as_str());
    let rest = caps.name("rest").map_or("", |m| m.as_str());

    let (port, pathname) = split_shorthand_port(host, rest);

    Some(RawMatch {
        shape: Shape::SshShorthand,
        protocols: Vec::new(),
        user: caps.name("user").map(|m| m.as_str()),
        host,
        port,
        pathname,
    })
}

fn split_shorthand_port<'a>(host: &str, rest: &'a str) -> (Option<&'a str>, &'a str) {
    if let Some(port_caps) = SHORTHAND_COLON_PORT_RE.captures(rest) {
        return (
            port_caps.name("port").map(|m| m.as_str()),
            port_caps.name("pathname").map_or("", |m| m.as_str()),
        );
    }

    if let Some(port_caps) = SHORTHAND_SLASH_PORT_RE.captures(rest) {
        let pathname = port_caps.name("pathname").map_or("", |m| m.as_str());
        let remaining = pathname.split('/').filter(|s| !s.is_empty()).count();
        if platform::lookup(host).ssh_port_in_path(host) && remaining >= 2 {
            return (port_caps.name("port").map(|m| m.as_str()), pathname);
        }
        log::trace!("'{}' after '{}:' read as owner, not port", rest, host);
    }

    (None, rest)
}

pub fn match_ssh_url(input: &str) -> Option<RawMatch<'_>> {
    SSH_URL_RE
        .captures(input)
        .map(|caps| from_scheme_captures(Shape::SshUrl, &caps))
}

pub fn match_git_url(input: &str) -> Option<RawMatch<'_>> {
    GIT_URL_RE
        .captures(input)
        .map(|caps| from_scheme_captures(Shape::GitUrl, &caps))
}

pub fn match_http_url(input: &str) -> Option<RawMatch<'_>> {
    HTTP_URL_RE
        .captures(input)
        .map(|caps| from_scheme_captures(Shape::HttpUrl, &caps))
}

fn from_scheme_captures<'a>(shape: Shape, caps: &Captures<'a>) -> RawMatch<'a> {
    let protocols = caps
        .name("scheme")
        .map(|m| {
            m.as_str()
                .split('+')
                .map(|token| token.to_ascii_lowercase())
                .collect()
        })
        .unwrap_or_default();

    RawMatch {
        shape,
        protocols,
        user: caps.name("user").map(|m| m.as_str()),
        host: caps.name("host").map_or("", |m| m.as_str()),
        port: caps.name("port").map(|m| m.as_str()),
        pathname: caps.name("pathname").map_or("", |m| m.as_str()),
    }
}
