//! Gateways for listing pull requests through the GitHub REST API.
//!
//! [`PullRequestGateway`] is the seam between lookups and GitHub: it exposes
//! exactly the two list endpoints lookups need. [`OctocrabGateway`] issues
//! real HTTP requests; tests substitute the generated `MockPullRequestGateway`.

mod client;
mod error_mapping;
mod octocrab_gateway;


pub use octocrab_gateway::OctocrabGateway;

use async_trait::async_trait;

use crate::github::error::GatewayError;
use crate::github::locator::RepositoryLocator;
use crate::github::pagination::{PageRequest, PullRequestPage};

/// Filters and page position for [`PullRequestGateway::list_pull_requests`].
///
/// Listings are always restricted to open pull requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPullRequestsParams {
    /// Server-side base branch filter (bare branch name).
    pub base: Option<String>,
    /// Page to fetch.
    pub page: PageRequest,
}

impl ListPullRequestsParams {
    /// Open pull requests, optionally restricted to a base branch.
    #[must_use]
    pub const fn open(base: Option<String>) -> Self {
        Self {
            base,
            page: PageRequest::first(),
        }
    }

    /// Same filters, different page.
    #[must_use]
    pub fn at_page(&self, page: u32) -> Self {
        Self {
            page: self.page.at(page),
            ..self.clone()
        }
    }
}

/// Remote operations used by pull request lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PullRequestGateway: Send + Sync {
    /// List pull requests associated with a commit.
    async fn list_pull_requests_for_commit(
        &self,
        locator: &RepositoryLocator,
        sha: &str,
        page: PageRequest,
    ) -> Result<PullRequestPage, GatewayError>;

    /// List pull requests for the repository.
    async fn list_pull_requests(
        &self,
        locator: &RepositoryLocator,
        params: &ListPullRequestsParams,
    ) -> Result<PullRequestPage, GatewayError>;
}
