// src/constants.rs

/// User reported when the URL carries no explicit user token.
pub const DEFAULT_USER: &str = "git";

/// Suffix stripped from the repository segment.
pub const GIT_SUFFIX: &str = ".git";

/// Marker introducing a ref followed by a file path (`/blob/<ref>/<path>`).
pub const BLOB_MARKER: &str = "blob";

/// Marker introducing a branch name (`/tree/<branch>`).
pub const TREE_MARKER: &str = "tree";

/// GitLab separator segment; it ends the locator, usually before `tree` or `blob`.
pub const GITLAB_SEPARATOR: &str = "-";

/// Bitbucket's file marker (`/src/<ref>/<path>`).
pub const BITBUCKET_SRC_MARKER: &str = "src";

/// Bitbucket's branch marker (`/branch/<name>`).
pub const BITBUCKET_BRANCH_MARKER: &str = "branch";
