//! Pull request records returned by lookups.
//!
//! Types prefixed with `Api` are deserialisation targets for GitHub payloads
//! and convert into the public domain types.

use serde::Deserialize;

#[cfg(feature = "test-support")]
pub mod test_support;

/// State value GitHub reports for open pull requests.
pub const OPEN_STATE: &str = "open";

/// One side of a pull request (the source head or the target base).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestBranch {
    /// Commit SHA at the tip of the branch.
    pub sha: Option<String>,
    /// Branch name, e.g. `main`.
    pub git_ref: Option<String>,
}

/// Read-only view of a pull request.
///
/// Lookups pass these through unmodified; only [`state`](Self::state),
/// the head SHA and the base ref are inspected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequest {
    /// Pull request number.
    pub number: u64,
    /// Title of the pull request.
    pub title: Option<String>,
    /// State (e.g. open, closed).
    pub state: Option<String>,
    /// HTML URL for displaying to a user.
    pub html_url: Option<String>,
    /// Source branch.
    pub head: PullRequestBranch,
    /// Target branch.
    pub base: PullRequestBranch,
}

impl PullRequest {
    /// Returns true when GitHub reports the pull request as open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.as_deref() == Some(OPEN_STATE)
    }

    /// Head commit SHA, if present.
    #[must_use]
    pub fn head_sha(&self) -> Option<&str> {
        self.head.sha.as_deref()
    }

    /// Base branch name, if present.
    #[must_use]
    pub fn base_ref(&self) -> Option<&str> {
        self.base.git_ref.as_deref()
    }

    /// Returns true when the head SHA equals `sha` exactly.
    #[must_use]
    pub fn has_head_sha(&self, sha: &str) -> bool {
        self.head_sha() == Some(sha)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiPullRequest {
    number: u64,
    title: Option<String>,
    state: Option<String>,
    html_url: Option<String>,
    head: Option<ApiBranch>,
    base: Option<ApiBranch>,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiBranch {
    sha: Option<String>,
    #[serde(rename = "ref")]
    git_ref: Option<String>,
}

impl From<ApiBranch> for PullRequestBranch {
    fn from(value: ApiBranch) -> Self {
        Self {
            sha: value.sha,
            git_ref: value.git_ref,
        }
    }
}

impl From<ApiPullRequest> for PullRequest {
    fn from(value: ApiPullRequest) -> Self {
        Self {
            number: value.number,
            title: value.title,
            state: value.state,
            html_url: value.html_url,
            head: value.head.map(PullRequestBranch::from).unwrap_or_default(),
            base: value.base.map(PullRequestBranch::from).unwrap_or_default(),
        }
    }
}
