//! prfind library crate for finding the open pull requests of a commit or
//! branch.
//!
//! The library wraps Octocrab behind a small gateway trait, walks GitHub's
//! paginated list endpoints, and filters the results. A commit lookup asks
//! GitHub for the pull requests associated with the commit and, when that
//! finds nothing, scans every open pull request for a matching head.

pub mod config;
pub mod github;

pub use config::{LookupTarget, PrFindConfig};
pub use github::{
    GatewayError, IntakeError, ListPullRequestsParams, LookupError, LookupOperation,
    OctocrabGateway, PageRequest, PersonalAccessToken, PullRequest, PullRequestBranch,
    PullRequestFinder, PullRequestGateway, PullRequestPage, RateLimitInfo, RepositoryLocator,
    ShaStrategy,
};
