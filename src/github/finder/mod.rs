//! Finds the open pull requests associated with a commit or branch.
//!
//! [`PullRequestFinder`] offers four lookups over a [`PullRequestGateway`]:
//!
//! - [`by_commit_association`](PullRequestFinder::by_commit_association) asks
//!   GitHub which pull requests contain a commit and keeps the open ones whose
//!   head is that commit.
//! - [`by_sha_scan`](PullRequestFinder::by_sha_scan) lists every open pull
//!   request and keeps those whose head is the commit.
//! - [`for_sha`](PullRequestFinder::for_sha) runs the association lookup and
//!   falls back to the scan when it finds nothing. GitHub does not always
//!   associate commits pushed to forks with their pull requests.
//! - [`for_ref`](PullRequestFinder::for_ref) lists open pull requests
//!   targeting a branch.
//!
//! Every lookup walks all pages sequentially, 100 records at a time, and
//! fails as a whole on the first page that cannot be fetched.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::error::{GatewayError, LookupError, LookupOperation};
use super::gateway::{ListPullRequestsParams, PullRequestGateway};
use super::locator::RepositoryLocator;
use super::models::PullRequest;
use super::pagination::{PageRequest, PullRequestPage};
use super::reference::branch_name;


/// How [`PullRequestFinder::for_sha_with`] searches for a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShaStrategy {
    /// Commit association first, full scan when it finds nothing.
    #[default]
    Auto,
    /// Commit association only.
    Association,
    /// Full scan of open pull requests only.
    Scan,
}

impl ShaStrategy {
    /// Name accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Association => "association",
            Self::Scan => "scan",
        }
    }
}

impl fmt::Display for ShaStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a strategy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown lookup strategy `{0}` (expected auto, association, or scan)")]
pub struct UnknownStrategy(String);

impl FromStr for ShaStrategy {
    type Err = UnknownStrategy;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "association" => Ok(Self::Association),
            "scan" => Ok(Self::Scan),
            _ => Err(UnknownStrategy(value.to_owned())),
        }
    }
}

/// Where a paginated lookup reads its pages from.
enum PageSource<'a> {
    Commit { sha: &'a str },
    Listing(ListPullRequestsParams),
}

/// Looks up open pull requests through a gateway.
///
/// # Example
///
/// ```ignore
/// use prfind::{OctocrabGateway, PersonalAccessToken, PullRequestFinder, RepositoryLocator};
///
/// let token = PersonalAccessToken::new("ghp_example")?;
/// let locator = RepositoryLocator::from_owner_repo("owner", "repo")?;
/// let gateway = OctocrabGateway::for_token(&token, &locator)?;
/// let finder = PullRequestFinder::new(&gateway);
/// let prs = finder.for_sha(&locator, "4b825dc642cb6eb9a060e54bf8d69288fbee4904").await?;
/// ```
pub struct PullRequestFinder<'client, Gateway>
where
    Gateway: PullRequestGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> PullRequestFinder<'client, Gateway>
where
    Gateway: PullRequestGateway,
{
    /// Create a finder over the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Open pull requests whose head is `sha`, via the commit association
    /// endpoint.
    ///
    /// GitHub also returns pull requests that merely contain the commit, and
    /// closed ones, so both the state and the head SHA are checked here.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] when any page cannot be fetched.
    pub async fn by_commit_association(
        &self,
        locator: &RepositoryLocator,
        sha: &str,
    ) -> Result<Vec<PullRequest>, LookupError> {
        self.collect(
            locator,
            LookupOperation::CommitAssociation,
            PageSource::Commit { sha },
            |pr| {
                let matched = pr.is_open() && pr.has_head_sha(sha);
                if matched {
                    debug!(
                        head_sha = sha,
                        number = pr.number,
                        "found open pull request with head SHA"
                    );
                }
                matched
            },
        )
        .await
    }

    /// Open pull requests whose head is `sha`, by scanning every open pull
    /// request in the repository.
    ///
    /// The open-state filter is applied by GitHub and not re-checked.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] when any page cannot be fetched.
    pub async fn by_sha_scan(
        &self,
        locator: &RepositoryLocator,
        sha: &str,
    ) -> Result<Vec<PullRequest>, LookupError> {
        self.collect(
            locator,
            LookupOperation::ShaScan,
            PageSource::Listing(ListPullRequestsParams::open(None)),
            |pr| {
                let matched = pr.has_head_sha(sha);
                if matched {
                    debug!(
                        head_sha = sha,
                        number = pr.number,
                        "found open pull request with head SHA"
                    );
                }
                matched
            },
        )
        .await
    }

    /// Open pull requests whose head is `sha`.
    ///
    /// Tries [`by_commit_association`](Self::by_commit_association) and only
    /// when that finds nothing runs [`by_sha_scan`](Self::by_sha_scan). The
    /// two result sets are never merged.
    ///
    /// # Errors
    ///
    /// Returns the first [`LookupError`] encountered; an association failure
    /// is returned without attempting the scan.
    pub async fn for_sha(
        &self,
        locator: &RepositoryLocator,
        sha: &str,
    ) -> Result<Vec<PullRequest>, LookupError> {
        let associated = self.by_commit_association(locator, sha).await?;
        if !associated.is_empty() {
            return Ok(associated);
        }

        debug!(
            repository = %locator.slug(),
            head_sha = sha,
            "no pull requests found via commit association, searching all pull requests by SHA"
        );
        self.by_sha_scan(locator, sha).await
    }

    /// Open pull requests whose head is `sha`, using the given strategy.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] when any page cannot be fetched.
    pub async fn for_sha_with(
        &self,
        locator: &RepositoryLocator,
        sha: &str,
        strategy: ShaStrategy,
    ) -> Result<Vec<PullRequest>, LookupError> {
        match strategy {
            ShaStrategy::Auto => self.for_sha(locator, sha).await,
            ShaStrategy::Association => self.by_commit_association(locator, sha).await,
            ShaStrategy::Scan => self.by_sha_scan(locator, sha).await,
        }
    }

    /// Open pull requests targeting the branch named by `git_ref`.
    ///
    /// `refs/heads/main` and `main` select the same branch. The base filter is
    /// applied by GitHub and every returned record is kept.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] when any page cannot be fetched.
    pub async fn for_ref(
        &self,
        locator: &RepositoryLocator,
        git_ref: &str,
    ) -> Result<Vec<PullRequest>, LookupError> {
        let base = branch_name(git_ref).to_owned();
        self.collect(
            locator,
            LookupOperation::BaseRef,
            PageSource::Listing(ListPullRequestsParams::open(Some(base))),
            |pr| {
                debug!(
                    base_ref = pr.base_ref().unwrap_or_default(),
                    number = pr.number,
                    "found open pull request with base ref"
                );
                true
            },
        )
        .await
    }

    /// Walks every page from `source`, keeping records accepted by `keep`.
    ///
    /// Stops after the first page whose next-page cursor is zero. A failed
    /// page discards everything collected so far.
    async fn collect<F>(
        &self,
        locator: &RepositoryLocator,
        operation: LookupOperation,
        source: PageSource<'_>,
        mut keep: F,
    ) -> Result<Vec<PullRequest>, LookupError>
    where
        F: FnMut(&PullRequest) -> bool,
    {
        let mut results = Vec::new();
        let mut cursor = Some(PageRequest::first().page());

        while let Some(page) = cursor {
            let fetched = self
                .fetch(locator, &source, page)
                .await
                .map_err(|error| LookupError::new(operation, locator.slug(), error))?;
            cursor = fetched.next();

            for pr in fetched.items {
                if keep(&pr) {
                    results.push(pr);
                }
            }
        }

        Ok(results)
    }

    async fn fetch(
        &self,
        locator: &RepositoryLocator,
        source: &PageSource<'_>,
        page: u32,
    ) -> Result<PullRequestPage, GatewayError> {
        match source {
            PageSource::Commit { sha } => {
                self.client
                    .list_pull_requests_for_commit(locator, sha, PageRequest::first().at(page))
                    .await
            }
            PageSource::Listing(params) => {
                self.client
                    .list_pull_requests(locator, &params.at_page(page))
                    .await
            }
        }
    }
}
