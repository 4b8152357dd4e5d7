//! Test helpers for constructing `PullRequest` fixtures and GitHub payloads.
//!
//! # Examples
//!
//! ```
//! use prfind::github::models::test_support::{open_pull_request, pull_request_json};
//!
//! let pr = open_pull_request(1, "abc123");
//! assert!(pr.is_open());
//!
//! let body = pull_request_json(&pr);
//! assert_eq!(body["head"]["sha"], "abc123");
//! ```

use serde_json::{Value, json};

use super::{OPEN_STATE, PullRequest, PullRequestBranch};

/// Constructs an open pull request whose head is at `head_sha`.
///
/// The base branch is `main`.
#[must_use]
pub fn open_pull_request(number: u64, head_sha: &str) -> PullRequest {
    pull_request(number, OPEN_STATE, head_sha, "main")
}

/// Constructs a pull request with explicit state, head SHA and base ref.
#[must_use]
pub fn pull_request(number: u64, state: &str, head_sha: &str, base_ref: &str) -> PullRequest {
    PullRequest {
        number,
        title: Some(format!("PR #{number}")),
        state: Some(state.to_owned()),
        html_url: None,
        head: PullRequestBranch {
            sha: Some(head_sha.to_owned()),
            git_ref: Some(format!("topic-{number}")),
        },
        base: PullRequestBranch {
            sha: None,
            git_ref: Some(base_ref.to_owned()),
        },
    }
}

/// Renders a pull request as the JSON GitHub returns from list endpoints.
#[must_use]
pub fn pull_request_json(pr: &PullRequest) -> Value {
    json!({
        "number": pr.number,
        "title": pr.title,
        "state": pr.state,
        "html_url": pr.html_url,
        "head": { "sha": pr.head.sha, "ref": pr.head.git_ref },
        "base": { "sha": pr.base.sha, "ref": pr.base.git_ref }
    })
}

/// Renders a page of pull requests as a JSON array.
#[must_use]
pub fn pull_requests_json(prs: &[PullRequest]) -> Value {
    Value::Array(prs.iter().map(pull_request_json).collect())
}
