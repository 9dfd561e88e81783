// tests/common.rs

use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // Only the CLI tests use this.
pub fn giturlparse_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("giturlparse"))
}

/// Expected field values for one URL.
#[allow(dead_code)]
pub struct Expected {
    pub host: &'static str,
    pub user: &'static str,
    pub port: &'static str,
    pub owner: &'static str,
    pub groups: &'static [&'static str],
    pub repo: &'static str,
    pub branch: &'static str,
    pub path: &'static str,
    pub path_raw: &'static str,
    pub pathname: &'static str,
    pub protocol: &'static str,
    pub protocols: &'static [&'static str],
    pub platform: &'static str,
}

/// Parses `url` and asserts every field against `expected`.
#[allow(dead_code)]
pub fn assert_parsed(url: &str, expected: &Expected) {
    let p = giturlparse::parse(url);
    assert!(p.valid(), "{} is not a valid URL", url);
    assert_eq!(p.host(), expected.host, "[{}] host", url);
    assert_eq!(p.resource(), expected.host, "[{}] resource", url);
    assert_eq!(p.user(), expected.user, "[{}] user", url);
    assert_eq!(p.port(), expected.port, "[{}] port", url);
    assert_eq!(p.owner(), expected.owner, "[{}] owner", url);
    assert_eq!(p.groups(), expected.groups, "[{}] groups", url);
    assert_eq!(p.repo(), expected.repo, "[{}] repo", url);
    assert_eq!(p.name(), expected.repo, "[{}] name", url);
    assert_eq!(p.branch(), expected.branch, "[{}] branch", url);
    assert_eq!(p.path(), expected.path, "[{}] path", url);
    assert_eq!(p.path_raw(), expected.path_raw, "[{}] path_raw", url);
    assert_eq!(p.pathname(), expected.pathname, "[{}] pathname", url);
    assert_eq!(p.protocol(), expected.protocol, "[{}] protocol", url);
    assert_eq!(p.protocols(), expected.protocols, "[{}] protocols", url);
    assert_eq!(p.platform().as_str(), expected.platform, "[{}] platform", url);
}
