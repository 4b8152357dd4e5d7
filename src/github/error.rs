//! Error types exposed by the GitHub lookup layer.
//!
//! Three layers exist. [`GatewayError`] describes why a single request to
//! GitHub failed. [`LookupError`] is the only failure a
//! [`PullRequestFinder`](super::PullRequestFinder) reports and wraps the
//! gateway cause together with the operation and repository it belongs to.
//! [`IntakeError`] is the crate-level error used by input validation and the
//! CLI.

use std::fmt;

use thiserror::Error;

/// Rate limit details captured when GitHub rejects a request for quota
/// reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    limit: u32,
    remaining: u32,
    reset_at: u64,
}

impl RateLimitInfo {
    /// Creates rate limit details from the values GitHub reports.
    #[must_use]
    pub const fn new(limit: u32, remaining: u32, reset_at: u64) -> Self {
        Self {
            limit,
            remaining,
            reset_at,
        }
    }

    /// Maximum requests allowed in the current window.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Requests left in the current window.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Unix timestamp at which the window resets.
    #[must_use]
    pub const fn reset_at(&self) -> u64 {
        self.reset_at
    }
}

/// Failure of a single request issued by a gateway.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The API base URL or a request URL could not be parsed.
    #[error("invalid GitHub URL: {0}")]
    InvalidUrl(String),

    /// GitHub rejected the credentials (401/403).
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response detail from GitHub.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The API rate limit is exhausted.
    #[error("GitHub API rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Quota details when they could be fetched.
        rate_limit: Option<RateLimitInfo>,
        /// Error message from GitHub.
        message: String,
    },

    /// Page parameters fall outside what GitHub accepts.
    #[error("invalid pagination: {message}")]
    InvalidPagination {
        /// Description of the offending parameter.
        message: String,
    },
}

/// The lookup operation during which a request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOperation {
    /// Listing pull requests associated with a commit.
    CommitAssociation,
    /// Listing every open pull request to match a head SHA.
    ShaScan,
    /// Listing open pull requests targeting a branch.
    BaseRef,
}

impl LookupOperation {
    /// Short name used in messages and log fields.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CommitAssociation => "commit association",
            Self::ShaScan => "sha scan",
            Self::BaseRef => "base ref",
        }
    }
}

impl fmt::Display for LookupOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A page fetch failed while looking up pull requests.
///
/// Carries the operation and `owner/repo` pair alongside the gateway cause so
/// callers can branch on [`LookupError::cause`] without parsing messages.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{operation}: failed to list pull requests for repository {repository}")]
pub struct LookupError {
    operation: LookupOperation,
    repository: String,
    #[source]
    source: GatewayError,
}

impl LookupError {
    /// Wraps a gateway failure with lookup context.
    #[must_use]
    pub const fn new(operation: LookupOperation, repository: String, source: GatewayError) -> Self {
        Self {
            operation,
            repository,
            source,
        }
    }

    /// Operation that was running when the request failed.
    #[must_use]
    pub const fn operation(&self) -> LookupOperation {
        self.operation
    }

    /// Repository in `owner/repo` form.
    #[must_use]
    pub const fn repository(&self) -> &str {
        self.repository.as_str()
    }

    /// Underlying gateway failure.
    #[must_use]
    pub const fn cause(&self) -> &GatewayError {
        &self.source
    }
}

/// Errors surfaced while validating input, loading configuration, or running
/// a lookup from the CLI.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntakeError {
    /// A repository URL could not be parsed.
    #[error("repository URL is invalid: {0}")]
    InvalidUrl(String),

    /// Owner or repository name is missing.
    #[error("repository must be given as owner/repo")]
    MissingPathSegments,

    /// The authentication token was missing.
    #[error("personal access token is required")]
    MissingToken,

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Writing output failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Building the GitHub client failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// A lookup failed while fetching pull requests.
    #[error("{0}: {cause}", cause = .0.cause())]
    Lookup(#[from] LookupError),
}
