//! `giturlparse` is a library and command-line tool for decomposing git
//! repository URLs into structured records.
//!
//! It understands the URL shapes emitted by hosting platforms such as GitHub,
//! GitLab and Bitbucket, as well as self-hosted servers:
//! - SSH shorthand: `git@github.com:Org/Repo.git`, `git@host.org:9999/Org/Repo.git`
//! - SSH URLs: `ssh://git@host.org:9999/Org/Repo.git`
//! - Native git URLs: `git://host.org/Org/Repo.git`
//! - HTTP(S) URLs, optionally `git+`-prefixed: `git+https://github.com/Org/Repo.git`
//!
//! Web URLs pointing into a repository are understood too: GitLab nested
//! groups, branches (`/tree/<branch>`, `/-/tree/<branch>`) and files
//! (`/blob/<ref>/<path>`).
//!
//! Parsing is a pure function over text. It never fails: a string that does
//! not resolve to an owner and a repository yields a record whose
//! [`valid`](ParsedUrl::valid) flag is `false`.
//!
//! # Example: Library Usage
//!
//! ```
//! use giturlparse::{parse, Platform};
//!
//! let parsed = parse("git@host.org:9999/Org/Group/subGroup/Repo.git/blob/master/giturlparse/github.py");
//! assert!(parsed.valid());
//! assert_eq!(parsed.host(), "host.org");
//! assert_eq!(parsed.port(), "9999");
//! assert_eq!(parsed.owner(), "Org");
//! assert_eq!(parsed.groups(), ["Group", "subGroup"]);
//! assert_eq!(parsed.repo(), "Repo");
//! assert_eq!(parsed.path(), "master/giturlparse/github.py");
//! assert_eq!(parsed.protocol(), "ssh");
//! assert_eq!(parsed.platform(), Platform::Gitlab);
//!
//! assert!(!parse("https://github.com/Org").valid());
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod matcher;
pub mod output;
pub mod parsed;
pub mod path;
pub mod platform;
pub mod prelude;
pub mod protocol;

// Re-export key public types for easier use as a library
pub use errors::{Error, Result};
pub use parsed::ParsedUrl;
pub use platform::Platform;
pub use protocol::Protocol;

/// Parses a git repository URL.
///
/// Surrounding whitespace is ignored. The returned record is always populated
/// on a best-effort basis; check [`ParsedUrl::valid`] before trusting it.
///
/// # Examples
/// ```
/// let parsed = giturlparse::parse("git+https://github.com/Org/Repo.git");
/// assert!(parsed.valid());
/// assert_eq!(parsed.protocol(), "https");
/// assert_eq!(parsed.protocols(), ["git", "https"]);
/// assert!(parsed.github());
/// ```
#[tracing::instrument(level = "trace")]
pub fn parse(url: &str) -> ParsedUrl {
    ParsedUrl::from_input(url)
}

/// Returns whether `url` resolves to an owner and a repository.
///
/// # Examples
/// ```
/// assert!(giturlparse::validate("git@github.com:Org/Repo.git"));
/// assert!(!giturlparse::validate("git@github.com:Org"));
/// ```
pub fn validate(url: &str) -> bool {
    parse(url).valid()
}

/// Parses `url`, turning an invalid result into [`Error::InvalidUrl`].
///
/// # Examples
/// ```
/// use giturlparse::{try_parse, Error};
///
/// let parsed = try_parse("https://gitlab.com/Org/Group/Repo.git").unwrap();
/// assert_eq!(parsed.groups(), ["Group"]);
///
/// assert!(matches!(try_parse("@github.com:Org/Repo.git"), Err(Error::InvalidUrl { .. })));
/// ```
pub fn try_parse(url: &str) -> Result<ParsedUrl> {
    parse(url).into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_idempotent() {
        let url = "git://host.org:9999/Org/Group/subGroup/Repo.git/-/tree/feature/custom-branch";
        assert_eq!(parse(url), parse(url));
    }

    #[test]
    fn test_validate_matches_parse() {
        for url in [
            "git@github.com:Org/Repo.git",
            "https://github.com/Org",
            "git://github.com/Org",
            "",
        ] {
            assert_eq!(validate(url), parse(url).valid());
        }
    }
}
