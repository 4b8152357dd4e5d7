//! Git ref helpers.

/// Prefix carried by fully qualified branch refs.
pub const BRANCH_REF_PREFIX: &str = "refs/heads/";

/// Reduces a fully qualified branch ref to the bare branch name.
///
/// Only a literal `refs/heads/` prefix is stripped; any other input is
/// returned unchanged.
///
/// # Example
///
/// ```
/// use prfind::github::reference::branch_name;
///
/// assert_eq!(branch_name("refs/heads/main"), "main");
/// assert_eq!(branch_name("main"), "main");
/// assert_eq!(branch_name("refs/tags/v1"), "refs/tags/v1");
/// ```
#[must_use]
pub fn branch_name(git_ref: &str) -> &str {
    git_ref
        .strip_prefix(BRANCH_REF_PREFIX)
        .unwrap_or(git_ref)
}
