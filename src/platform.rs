//! The platform registry.
//!
//! Hosting platforms are described by a static, ordered table of
//! [`PlatformSpec`] records. Each record declares which hosts it claims and the
//! quirks of its web URLs: whether nested groups exist and which marker
//! keywords introduce a branch or a file path. Lookup is a plain scan of the
//! table; the last entry (gitlab) claims every host not taken before it.

use crate::constants::{
    BITBUCKET_BRANCH_MARKER, BITBUCKET_SRC_MARKER, BLOB_MARKER, TREE_MARKER,
};
use crate::protocol::Protocol;
use serde::Serialize;
use std::fmt;

/// Identity of the hosting platform a URL resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Github,
    Bitbucket,
    Friendcode,
    Assembla,
    Gitlab,
    /// Generic fallback for strings no platform could claim.
    Base,
}

impl Platform {
    /// The platform identifier (`github`, `gitlab`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Github => "github",
            Platform::Bitbucket => "bitbucket",
            Platform::Friendcode => "friendcode",
            Platform::Assembla => "assembla",
            Platform::Gitlab => "gitlab",
            Platform::Base => "base",
        }
    }

    /// The capability record of this platform.
    pub fn spec(&self) -> &'static PlatformSpec {
        match self {
            Platform::Base => &BASE,
            _ => PLATFORMS
                .iter()
                .find(|spec| spec.platform == *self)
                .unwrap_or(&BASE),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which hosts a platform claims.
#[derive(Debug, Clone, Copy)]
pub enum DomainRule {
    /// Only these hosts (compared case-insensitively).
    Exact(&'static [&'static str]),
    /// Any host.
    Any,
}

impl DomainRule {
    fn matches(&self, host: &str) -> bool {
        match self {
            DomainRule::Exact(domains) => domains.iter().any(|d| d.eq_ignore_ascii_case(host)),
            DomainRule::Any => true,
        }
    }
}

/// What a marker keyword introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// A ref followed by a file path.
    Blob,
    /// A branch name, which may itself contain `/`.
    Tree,
}

/// A keyword segment recognized in the trailer of a web URL.
#[derive(Debug, Clone, Copy)]
pub struct Marker {
    pub keyword: &'static str,
    pub kind: MarkerKind,
}

/// Capability record of a hosting platform.
#[derive(Debug)]
pub struct PlatformSpec {
    pub platform: Platform,
    pub domains: DomainRule,
    /// Whether segments between owner and repo are read as nested groups.
    pub supports_groups: bool,
    pub markers: &'static [Marker],
    /// Whether a bare `-` segment ends the locator (`/-/tree/main`, `/-/issues/5`).
    pub allows_separator: bool,
    /// Protocols the platform serves repositories over.
    pub protocols: &'static [Protocol],
    /// Whether self-hosted servers of this platform may expose SSH on a
    /// custom port, written `user@host:port/path`.
    pub custom_ssh_port: bool,
    /// Hosts run by the vendor itself; these only serve SSH on port 22.
    pub hosted_domains: &'static [&'static str],
}

impl PlatformSpec {
    /// Returns the marker kind for `keyword`, if it is one of this platform's markers.
    pub fn marker(&self, keyword: &str) -> Option<MarkerKind> {
        self.markers
            .iter()
            .find(|m| m.keyword == keyword)
            .map(|m| m.kind)
    }

    /// Whether this entry claims every host.
    pub fn is_catch_all(&self) -> bool {
        matches!(self.domains, DomainRule::Any)
    }

    pub fn supports(&self, protocol: Protocol) -> bool {
        self.protocols.contains(&protocol)
    }

    /// Whether leading digits in an SSH shorthand path on `host` may be a port.
    pub fn ssh_port_in_path(&self, host: &str) -> bool {
        self.custom_ssh_port
            && !self
                .hosted_domains
                .iter()
                .any(|d| d.eq_ignore_ascii_case(host))
    }
}

const WEB_MARKERS: &[Marker] = &[
    Marker {
        keyword: BLOB_MARKER,
        kind: MarkerKind::Blob,
    },
    Marker {
        keyword: TREE_MARKER,
        kind: MarkerKind::Tree,
    },
];

const BITBUCKET_MARKERS: &[Marker] = &[
    Marker {
        keyword: BITBUCKET_SRC_MARKER,
        kind: MarkerKind::Blob,
    },
    Marker {
        keyword: BITBUCKET_BRANCH_MARKER,
        kind: MarkerKind::Tree,
    },
];

const ALL_PROTOCOLS: &[Protocol] = &Protocol::ALL;
const NO_HTTP: &[Protocol] = &[Protocol::Ssh, Protocol::Https, Protocol::Git];

/// Registered platforms, in lookup order.
static PLATFORMS: [PlatformSpec; 5] = [
    PlatformSpec {
        platform: Platform::Github,
        domains: DomainRule::Exact(&["github.com", "gist.github.com"]),
        supports_groups: false,
        markers: WEB_MARKERS,
        allows_separator: false,
        protocols: NO_HTTP,
        custom_ssh_port: false,
        hosted_domains: &[],
    },
    PlatformSpec {
        platform: Platform::Bitbucket,
        domains: DomainRule::Exact(&["bitbucket.org"]),
        supports_groups: false,
        markers: BITBUCKET_MARKERS,
        allows_separator: false,
        protocols: NO_HTTP,
        custom_ssh_port: false,
        hosted_domains: &[],
    },
    PlatformSpec {
        platform: Platform::Friendcode,
        domains: DomainRule::Exact(&["friendco.de"]),
        supports_groups: false,
        markers: &[],
        allows_separator: false,
        protocols: NO_HTTP,
        custom_ssh_port: false,
        hosted_domains: &[],
    },
    PlatformSpec {
        platform: Platform::Assembla,
        domains: DomainRule::Exact(&["git.assembla.com"]),
        supports_groups: false,
        markers: &[],
        allows_separator: false,
        protocols: NO_HTTP,
        custom_ssh_port: false,
        hosted_domains: &[],
    },
    PlatformSpec {
        platform: Platform::Gitlab,
        domains: DomainRule::Any,
        supports_groups: true,
        markers: WEB_MARKERS,
        allows_separator: true,
        protocols: ALL_PROTOCOLS,
        custom_ssh_port: true,
        hosted_domains: &["gitlab.com"],
    },
];

static BASE: PlatformSpec = PlatformSpec {
    platform: Platform::Base,
    domains: DomainRule::Any,
    supports_groups: true,
    markers: WEB_MARKERS,
    allows_separator: true,
    protocols: ALL_PROTOCOLS,
    custom_ssh_port: true,
    hosted_domains: &[],
};

/// Finds the first registered platform claiming `host`.
///
/// An empty host (nothing matched) resolves to the generic `base` platform.
///
/// # Examples
/// ```
/// use giturlparse::platform::{lookup, Platform};
///
/// assert_eq!(lookup("github.com").platform, Platform::Github);
/// assert_eq!(lookup("git.example.org").platform, Platform::Gitlab);
/// assert_eq!(lookup("").platform, Platform::Base);
/// ```
pub fn lookup(host: &str) -> &'static PlatformSpec {
    if host.is_empty() {
        return &BASE;
    }
    PLATFORMS
        .iter()
        .find(|spec| spec.domains.matches(host))
        .unwrap_or(&BASE)
}

/// The generic fallback entry.
pub fn base() -> &'static PlatformSpec {
    &BASE
}
