//! Splits a raw pathname into owner, groups, repository and trailer.
//!
//! Hosting platforms inject positional keywords into their web URLs
//! (`/tree/<branch>`, `/blob/<ref>/<file>`, GitLab's `/-/tree/<branch>`). These
//! are peeled off as a trailer before the remaining locator is read as
//! `owner[/group...]/repo`. Markers are recognized by keyword only, so a group
//! or repository literally named like a marker is read as one.

use crate::constants::{GITLAB_SEPARATOR, GIT_SUFFIX};
use crate::platform::{MarkerKind, PlatformSpec};

/// Owner/groups/repo plus the decoded trailer of a pathname.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decomposed {
    pub owner: String,
    pub groups: Vec<String>,
    /// Repository name, `.git` suffix stripped.
    pub repo: String,
    pub branch: String,
    pub path: String,
    /// The trailer as it appeared, with a leading `/`.
    pub path_raw: String,
}

/// A marker found in the segment list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MarkerHit {
    /// Index of the first trailer segment (the marker, or the `-` before it).
    start: usize,
    /// `None` for a `-` trailer without a known marker (`/-/issues/5`).
    kind: Option<MarkerKind>,
    /// Index of the first segment after the marker keyword.
    content: usize,
}

/// Decomposes `pathname` according to the capabilities of `spec`.
///
/// # Examples
/// ```
/// use giturlparse::path::decompose;
/// use giturlparse::platform::Platform;
///
/// let parts = decompose(
///     "/Org/Group/subGroup/Repo.git/-/tree/feature/custom-branch",
///     Platform::Gitlab.spec(),
/// );
/// assert_eq!(parts.owner, "Org");
/// assert_eq!(parts.groups, vec!["Group", "subGroup"]);
/// assert_eq!(parts.repo, "Repo");
/// assert_eq!(parts.branch, "feature/custom-branch");
/// assert_eq!(parts.path_raw, "/-/tree/feature/custom-branch");
/// ```
pub fn decompose(pathname: &str, spec: &PlatformSpec) -> Decomposed {
    // Empty segments come from a leading slash, a trailing slash or `//`.
    let segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();

    let hit = find_marker(&segments, spec);
    let locator_len = match hit {
        Some(hit) => hit.start,
        // Without groups, anything past owner/repo is an unrecognized trailer.
        None if !spec.supports_groups => segments.len().min(2),
        None => segments.len(),
    };
    let (locator, trailer) = segments.split_at(locator_len);

    let mut parts = Decomposed::default();
    if let Some(owner) = locator.first() {
        parts.owner = owner.to_string();
    }
    if locator.len() >= 2 {
        let last = locator[locator.len() - 1];
        parts.repo = strip_git_suffix(last).to_string();
        parts.groups = locator[1..locator.len() - 1]
            .iter()
            .map(|g| g.to_string())
            .collect();
    }

    if !trailer.is_empty() {
        parts.path_raw = format!("/{}", trailer.join("/"));
    }
    if let Some(MarkerHit {
        kind: Some(kind),
        content,
        ..
    }) = hit
    {
        let content = segments.get(content..).unwrap_or_default().join("/");
        match kind {
            MarkerKind::Blob => parts.path = content,
            MarkerKind::Tree => parts.branch = content,
        }
    }

    log::trace!(
        "decomposed '{}' (platform {}): {:?}",
        pathname,
        spec.platform,
        parts
    );
    parts
}

/// Removes a trailing `.git`, compared case-insensitively.
fn strip_git_suffix(segment: &str) -> &str {
    let cut = segment.len().saturating_sub(GIT_SUFFIX.len());
    match segment.get(cut..) {
        Some(tail) if tail.eq_ignore_ascii_case(GIT_SUFFIX) => &segment[..cut],
        _ => segment,
    }
}

/// Scans for the first marker at or after index 2 (past owner and repo).
///
/// Platforms without nested groups only accept a marker directly after the repo.
/// On platforms using the `-` separator no namespace may be named `-`, so that
/// segment always ends the locator, with or without a marker after it.
fn find_marker(segments: &[&str], spec: &PlatformSpec) -> Option<MarkerHit> {
    let last_candidate = if spec.supports_groups {
        segments.len()
    } else {
        segments.len().min(3)
    };

    (2..last_candidate).find_map(|i| {
        let segment = segments[i];
        if spec.allows_separator && segment == GITLAB_SEPARATOR {
            let kind = segments.get(i + 1).and_then(|next| spec.marker(next));
            return Some(MarkerHit {
                start: i,
                kind,
                content: i + 2,
            });
        }
        spec.marker(segment).map(|kind| MarkerHit {
            start: i,
            kind: Some(kind),
            content: i + 1,
        })
    })
}
