//! Octocrab implementation of the pull request gateway.

use async_trait::async_trait;
use http::Uri;
use octocrab::{Octocrab, Page};
use url::Url;

use crate::github::error::{GatewayError, RateLimitInfo};
use crate::github::locator::{PersonalAccessToken, RepositoryLocator};
use crate::github::models::{ApiPullRequest, OPEN_STATE, PullRequest};
use crate::github::pagination::{MAX_PER_PAGE, PageRequest, PullRequestPage};

use super::client::build_octocrab_client;
use super::error_mapping::{is_rate_limit_error, map_octocrab_error};
use super::{ListPullRequestsParams, PullRequestGateway};

/// Octocrab-backed gateway.
pub struct OctocrabGateway {
    client: Octocrab,
}

impl OctocrabGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client for the given token, rooted at the API base
    /// of `locator`.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::InvalidUrl` when the base URI cannot be parsed
    /// or `GatewayError::Api` when Octocrab fails to construct a client.
    pub fn for_token(
        token: &PersonalAccessToken,
        locator: &RepositoryLocator,
    ) -> Result<Self, GatewayError> {
        let octocrab = build_octocrab_client(token, locator.api_base())?;
        Ok(Self::new(octocrab))
    }

    async fn fetch_page(
        &self,
        operation: &str,
        path: String,
        query: &[(&str, String)],
    ) -> Result<PullRequestPage, GatewayError> {
        let page: Page<ApiPullRequest> = match self.client.get(path, Some(&query)).await {
            Ok(page) => page,
            Err(error) => {
                return Err(self
                    .map_octocrab_error_with_rate_limit(operation, &error)
                    .await);
            }
        };

        let next_page = page.next.as_ref().map_or(0, next_page_number);
        let items = page.items.into_iter().map(PullRequest::from).collect();
        Ok(PullRequestPage::new(items, next_page))
    }

    async fn map_octocrab_error_with_rate_limit(
        &self,
        operation: &str,
        error: &octocrab::Error,
    ) -> GatewayError {
        match error {
            octocrab::Error::GitHub { source, .. } if is_rate_limit_error(source) => {
                let rate_limit = self.fetch_rate_limit_info().await;
                let base_message =
                    format!("{operation} failed: {message}", message = source.message);
                let message = match &rate_limit {
                    Some(info) => format!(
                        "{base_message} ({remaining}/{limit} requests left, resets at {reset})",
                        remaining = info.remaining(),
                        limit = info.limit(),
                        reset = info.reset_at()
                    ),
                    None => base_message,
                };

                GatewayError::RateLimitExceeded {
                    rate_limit,
                    message,
                }
            }
            _ => map_octocrab_error(operation, error),
        }
    }

    async fn fetch_rate_limit_info(&self) -> Option<RateLimitInfo> {
        let rate = self.client.ratelimit().get().await.ok()?.rate;
        let limit = u32::try_from(rate.limit).ok()?;
        let remaining = u32::try_from(rate.remaining).ok()?;
        Some(RateLimitInfo::new(limit, remaining, rate.reset))
    }
}

#[async_trait]
impl PullRequestGateway for OctocrabGateway {
    async fn list_pull_requests_for_commit(
        &self,
        locator: &RepositoryLocator,
        sha: &str,
        page: PageRequest,
    ) -> Result<PullRequestPage, GatewayError> {
        validate_page_request(page)?;

        let query = page_query(page);
        self.fetch_page(
            "list pulls for commit",
            locator.commit_pulls_path(sha)?,
            &query,
        )
        .await
    }

    async fn list_pull_requests(
        &self,
        locator: &RepositoryLocator,
        params: &ListPullRequestsParams,
    ) -> Result<PullRequestPage, GatewayError> {
        validate_page_request(params.page)?;

        let mut query = vec![("state", OPEN_STATE.to_owned())];
        if let Some(base) = &params.base {
            query.push(("base", base.clone()));
        }
        query.extend(page_query(params.page));

        self.fetch_page("list pulls", locator.pulls_path()?, &query)
            .await
    }
}

fn page_query(page: PageRequest) -> [(&'static str, String); 2] {
    [
        ("page", page.page().to_string()),
        ("per_page", page.per_page().to_string()),
    ]
}

fn validate_page_request(page: PageRequest) -> Result<(), GatewayError> {
    if page.page() == 0 {
        return Err(GatewayError::InvalidPagination {
            message: "page must be at least 1".to_owned(),
        });
    }

    if page.per_page() == 0 {
        return Err(GatewayError::InvalidPagination {
            message: "per_page must be at least 1".to_owned(),
        });
    }

    if page.per_page() > MAX_PER_PAGE {
        return Err(GatewayError::InvalidPagination {
            message: format!("per_page must not exceed {MAX_PER_PAGE}"),
        });
    }

    Ok(())
}

/// Reads the `page` query parameter from a `rel="next"` link.
///
/// Links without a usable page number end the listing.
fn next_page_number(next: &Uri) -> u32 {
    let Ok(url) = Url::parse(&next.to_string()) else {
        tracing::warn!("ignoring unparseable next page link: {next}");
        return 0;
    };

    url.query_pairs()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse::<u32>().ok())
        .unwrap_or_else(|| {
            tracing::warn!("next page link carries no page number: {next}");
            0
        })
}
