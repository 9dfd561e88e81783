// tests/properties.rs

use giturlparse::{parse, ParsedUrl};
use std::thread;

const VALID_URLS: &[&str] = &[
    "git@github.com:Org/Repo.git",
    "git+https://github.com/Org/Repo.git",
    "https://github.com/foo-bar/xpwn",
    "git://github.com/Org/Repo.git",
    "git@bitbucket.org:Org/Repo.git",
    "git@host.org:9999/Org/Repo.git",
    "ssh://git@host.org:9999/Org/Repo.git",
    "git+ssh://git@host.org/Org/Repo.git",
    "http://host.org:8080/Org/Group/Repo.git",
    "https://github.com/nephila/giturlparse/blob/master/giturlparse/github.py",
    "https://github.com/nephila/giturlparse/tree/feature/py37",
    "https://gitlab.com/nephila/group2/third-group/giturlparse/blob/master/giturlparse/platforms/github.py",
    "git://host.org:9999/Org/Group/subGroup/Repo.git/-/tree/feature/custom-branch",
];

#[test]
fn test_valid_records_hold_invariants() {
    for url in VALID_URLS {
        let p = parse(url);
        assert!(p.valid(), "{} should be valid", url);
        assert!(!p.owner().is_empty() && !p.repo().is_empty());
        assert_eq!(p.repo(), p.name());
        assert_eq!(p.host(), p.resource());
        assert!(!p.repo().ends_with(".git"));
        assert!(url.contains(p.pathname()), "{}: pathname is a substring", url);
        if let Some(last) = p.protocols().last() {
            assert_eq!(last, p.protocol());
        } else {
            assert_eq!(p.protocol(), "ssh");
        }
    }
}

#[test]
fn test_group_count_matches_nesting_depth() {
    for depth in 0..5 {
        let groups: Vec<String> = (0..depth).map(|i| format!("g{}", i)).collect();
        let mut segments = vec!["Org".to_string()];
        segments.extend(groups.iter().cloned());
        segments.push("Repo.git".to_string());
        let url = format!("https://gitlab.com/{}/blob/main/a.py", segments.join("/"));

        let p = parse(&url);
        assert_eq!(p.owner(), "Org");
        assert_eq!(p.repo(), "Repo");
        assert_eq!(p.groups(), groups.as_slice(), "{}", url);
        assert_eq!(p.path(), "main/a.py");
    }
}

#[test]
fn test_parsing_is_idempotent() {
    for url in VALID_URLS.iter().chain(["git@github.com:Org", ""].iter()) {
        assert_eq!(parse(url), parse(url));
    }
}

#[test]
fn test_concurrent_parsing_matches_sequential() {
    let sequential: Vec<ParsedUrl> = VALID_URLS.iter().map(|u| parse(u)).collect();

    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| VALID_URLS.iter().map(|u| parse(u)).collect::<Vec<_>>()))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), sequential);
    }
}

#[test]
fn test_rewrite_round_trips_through_parse() {
    for url in VALID_URLS {
        let original = parse(url);
        for (protocol, rewritten) in original.urls() {
            let reparsed = parse(&rewritten);
            assert!(reparsed.valid(), "{} -> {}", url, rewritten);
            assert_eq!(reparsed.protocol(), protocol);
            assert_eq!(reparsed.owner(), original.owner());
            assert_eq!(reparsed.groups(), original.groups());
            assert_eq!(reparsed.repo(), original.repo());
            assert_eq!(reparsed.host(), original.host());
            assert_eq!(reparsed.platform(), original.platform());
        }
    }
}
