//! The parsed URL record and the normalizer that assembles it.

use crate::constants::DEFAULT_USER;
use crate::errors::{Error, Result};
use crate::matcher::{self, RawMatch};
use crate::path::{self, Decomposed};
use crate::platform::{self, Platform, PlatformSpec};
use crate::protocol::Protocol;
use serde::Serialize;
use std::collections::BTreeMap;

/// Structured view of a git repository URL.
///
/// A `ParsedUrl` is produced by [`parse`](crate::parse) and never modified
/// afterwards; fields are exposed through accessors. When [`valid`](Self::valid)
/// is `false` the remaining fields hold whatever could be extracted.
///
/// # Examples
/// ```
/// use giturlparse::{parse, Platform};
///
/// let parsed = parse("https://gitlab.com/nephila/group2/third-group/giturlparse");
/// assert!(parsed.valid());
/// assert_eq!(parsed.owner(), "nephila");
/// assert_eq!(parsed.groups(), ["group2", "third-group"]);
/// assert_eq!(parsed.repo(), "giturlparse");
/// assert_eq!(parsed.platform(), Platform::Gitlab);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedUrl {
    url: String,
    host: String,
    resource: String,
    user: String,
    port: String,
    owner: String,
    groups: Vec<String>,
    repo: String,
    name: String,
    branch: String,
    path: String,
    path_raw: String,
    pathname: String,
    protocol: String,
    protocols: Vec<String>,
    platform: Platform,
    valid: bool,
}

impl ParsedUrl {
    /// Parses `input` into a record. Never fails; see [`valid`](Self::valid).
    pub(crate) fn from_input(input: &str) -> Self {
        let url = input.trim();
        match matcher::match_url(url) {
            Some(raw) => Self::normalize(url, raw),
            None => Self::unrecognized(url),
        }
    }

    /// Merges the raw match, the platform capabilities and the decomposed path.
    fn normalize(url: &str, raw: RawMatch<'_>) -> Self {
        let mut spec: &PlatformSpec = platform::lookup(raw.host);
        let parts: Decomposed = path::decompose(raw.pathname, spec);
        let valid = !parts.owner.is_empty() && !parts.repo.is_empty();

        // The catch-all entry only claims hosts whose locator resolved.
        if !valid && spec.is_catch_all() {
            spec = platform::base();
        }
        log::debug!(
            "'{}' resolved to platform '{}' (valid: {})",
            url,
            spec.platform,
            valid
        );

        let user = raw
            .user
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_USER)
            .to_string();

        ParsedUrl {
            url: url.to_string(),
            host: raw.host.to_string(),
            resource: raw.host.to_string(),
            user,
            port: raw.port.unwrap_or_default().to_string(),
            owner: parts.owner,
            groups: parts.groups,
            name: parts.repo.clone(),
            repo: parts.repo,
            branch: parts.branch,
            path: parts.path,
            path_raw: parts.path_raw,
            pathname: raw.pathname.to_string(),
            protocol: raw.protocol().as_str().to_string(),
            protocols: raw.protocols,
            platform: spec.platform,
            valid,
        }
    }

    fn unrecognized(url: &str) -> Self {
        ParsedUrl {
            url: url.to_string(),
            host: String::new(),
            resource: String::new(),
            user: String::new(),
            port: String::new(),
            owner: String::new(),
            groups: Vec::new(),
            repo: String::new(),
            name: String::new(),
            branch: String::new(),
            path: String::new(),
            path_raw: String::new(),
            pathname: String::new(),
            protocol: String::new(),
            protocols: Vec::new(),
            platform: Platform::Base,
            valid: false,
        }
    }

    /// Converts an invalid record into `Error::InvalidUrl`.
    pub(crate) fn into_result(self) -> Result<Self> {
        if self.valid {
            Ok(self)
        } else {
            Err(Error::InvalidUrl { url: self.url })
        }
    }

    /// The input the record was parsed from, surrounding whitespace trimmed.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Currently always equal to [`host`](Self::host).
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Connection user, `git` when the URL carries none.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Port as written in the URL, empty when absent.
    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Namespace segments between owner and repository.
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// Repository name without the `.git` suffix.
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Alias of [`repo`](Self::repo).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// File path following a blob marker (ref included).
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The trailer after owner/groups/repo, marker keyword included.
    pub fn path_raw(&self) -> &str {
        &self.path_raw
    }

    /// The path component exactly as delimited in the input.
    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// Transport used to reach the host (`ssh`, `https`, `http` or `git`).
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Scheme tokens present in the input, left to right.
    pub fn protocols(&self) -> &[String] {
        &self.protocols
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// `true` iff both owner and repository were extracted.
    pub fn valid(&self) -> bool {
        self.valid
    }

    pub fn github(&self) -> bool {
        self.platform == Platform::Github
    }

    pub fn bitbucket(&self) -> bool {
        self.platform == Platform::Bitbucket
    }

    pub fn gitlab(&self) -> bool {
        self.platform == Platform::Gitlab
    }

    pub fn assembla(&self) -> bool {
        self.platform == Platform::Assembla
    }

    pub fn friendcode(&self) -> bool {
        self.platform == Platform::Friendcode
    }

    /// Renders the repository as a clone URL for `protocol`.
    ///
    /// Returns `None` for invalid records. Branch and blob trailers are not
    /// carried over.
    ///
    /// # Examples
    /// ```
    /// use giturlparse::{parse, Protocol};
    ///
    /// let parsed = parse("git@host.org:9999/Org/Group/Repo.git");
    /// assert_eq!(
    ///     parsed.format(Protocol::Ssh).as_deref(),
    ///     Some("git@host.org:9999/Org/Group/Repo.git")
    /// );
    /// assert_eq!(
    ///     parsed.format(Protocol::Https).as_deref(),
    ///     Some("https://host.org/Org/Group/Repo.git")
    /// );
    /// assert_eq!(
    ///     parsed.format(Protocol::Git).as_deref(),
    ///     Some("git://host.org:9999/Org/Group/Repo.git")
    /// );
    /// ```
    pub fn format(&self, protocol: Protocol) -> Option<String> {
        if !self.valid {
            return None;
        }
        let locator = self.locator();
        let url = match protocol {
            Protocol::Ssh => {
                let port = if self.port.is_empty() {
                    String::new()
                } else {
                    format!("{}/", self.port)
                };
                format!("{}@{}:{}{}.git", self.user, self.host, port, locator)
            }
            Protocol::Https | Protocol::Http => {
                format!("{}://{}/{}.git", protocol, self.host, locator)
            }
            Protocol::Git => {
                let port = if self.port.is_empty() {
                    String::new()
                } else {
                    format!(":{}", self.port)
                };
                format!("git://{}{}/{}.git", self.host, port, locator)
            }
        };
        Some(url)
    }

    /// Like [`format`](Self::format), but checks the platform serves `protocol`.
    pub fn try_format(&self, protocol: Protocol) -> Result<String> {
        if !self.platform.spec().supports(protocol) {
            return Err(Error::UnsupportedProtocol {
                platform: self.platform.to_string(),
                protocol: protocol.to_string(),
            });
        }
        self.format(protocol).ok_or_else(|| Error::InvalidUrl {
            url: self.url.clone(),
        })
    }

    pub fn url2ssh(&self) -> Option<String> {
        self.format(Protocol::Ssh)
    }

    pub fn url2https(&self) -> Option<String> {
        self.format(Protocol::Https)
    }

    pub fn url2http(&self) -> Option<String> {
        self.format(Protocol::Http)
    }

    pub fn url2git(&self) -> Option<String> {
        self.format(Protocol::Git)
    }

    /// Clone URLs for every protocol the platform serves, keyed by protocol name.
    /// Empty for invalid records.
    pub fn urls(&self) -> BTreeMap<&'static str, String> {
        self.platform
            .spec()
            .protocols
            .iter()
            .filter_map(|p| self.format(*p).map(|url| (p.as_str(), url)))
            .collect()
    }

    /// `owner/[groups/]repo`
    fn locator(&self) -> String {
        let mut segments = Vec::with_capacity(self.groups.len() + 2);
        segments.push(self.owner.as_str());
        segments.extend(self.groups.iter().map(String::as_str));
        segments.push(self.repo.as_str());
        segments.join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_input_is_empty_and_invalid() {
        let parsed = ParsedUrl::from_input("not a url");
        assert!(!parsed.valid());
        assert_eq!(parsed.host(), "");
        assert_eq!(parsed.user(), "");
        assert_eq!(parsed.protocol(), "");
        assert_eq!(parsed.platform(), Platform::Base);
        assert_eq!(parsed.url(), "not a url");
    }

    #[test]
    fn test_partial_match_keeps_host() {
        let parsed = ParsedUrl::from_input("https://github.com/Org");
        assert!(!parsed.valid());
        assert_eq!(parsed.host(), "github.com");
        assert_eq!(parsed.owner(), "Org");
        assert_eq!(parsed.platform(), Platform::Github);
    }

    #[test]
    fn test_unknown_host_without_repo_falls_back_to_base() {
        let parsed = ParsedUrl::from_input("https://host.org/Org");
        assert!(!parsed.valid());
        assert_eq!(parsed.platform(), Platform::Base);
        assert!(!parsed.gitlab());
    }

    #[test]
    fn test_input_is_trimmed() {
        let parsed = ParsedUrl::from_input("  git@github.com:Org/Repo.git\n");
        assert!(parsed.valid());
        assert_eq!(parsed.url(), "git@github.com:Org/Repo.git");
        assert_eq!(parsed.repo(), "Repo");
    }

    #[test]
    fn test_explicit_user_is_kept() {
        let parsed = ParsedUrl::from_input("ssh://deploy@host.org/Org/Repo.git");
        assert_eq!(parsed.user(), "deploy");
        let parsed = ParsedUrl::from_input("https://github.com/Org/Repo.git");
        assert_eq!(parsed.user(), "git");
    }

    #[test]
    fn test_format_github() {
        let parsed = ParsedUrl::from_input("https://github.com/nephila/giturlparse/tree/feature/py37");
        assert_eq!(
            parsed.url2ssh().as_deref(),
            Some("git@github.com:nephila/giturlparse.git")
        );
        assert_eq!(
            parsed.url2https().as_deref(),
            Some("https://github.com/nephila/giturlparse.git")
        );
        assert_eq!(
            parsed.url2git().as_deref(),
            Some("git://github.com/nephila/giturlparse.git")
        );
        assert_eq!(
            parsed.url2http().as_deref(),
            Some("http://github.com/nephila/giturlparse.git")
        );
    }

    #[test]
    fn test_urls_follow_platform_protocols() {
        let github = ParsedUrl::from_input("git@github.com:Org/Repo.git").urls();
        assert_eq!(github.len(), 3);
        assert!(!github.contains_key("http"));
        assert_eq!(github["ssh"], "git@github.com:Org/Repo.git");

        let gitlab = ParsedUrl::from_input("https://gitlab.com/Org/Group/Repo").urls();
        assert_eq!(gitlab.len(), 4);
        assert_eq!(gitlab["http"], "http://gitlab.com/Org/Group/Repo.git");

        assert!(ParsedUrl::from_input("git@github.com:Org").urls().is_empty());
    }

    #[test]
    fn test_try_format_errors() {
        let github = ParsedUrl::from_input("git@github.com:Org/Repo.git");
        assert!(matches!(
            github.try_format(Protocol::Http),
            Err(Error::UnsupportedProtocol { .. })
        ));
        assert_eq!(
            github.try_format(Protocol::Https).unwrap(),
            "https://github.com/Org/Repo.git"
        );

        let invalid = ParsedUrl::from_input("https://gitlab.com/Org");
        assert!(matches!(
            invalid.try_format(Protocol::Ssh),
            Err(Error::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_into_result() {
        assert!(ParsedUrl::from_input("git@github.com:Org/Repo.git")
            .into_result()
            .is_ok());
        let err = ParsedUrl::from_input("git@github.com:Org")
            .into_result()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { ref url } if url == "git@github.com:Org"));
    }
}
