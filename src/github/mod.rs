//! GitHub pull request lookups.
//!
//! This module finds the open pull requests attached to a commit or branch.
//! Requests go through the [`PullRequestGateway`] trait, implemented with
//! Octocrab by [`OctocrabGateway`]. Failures are mapped into [`GatewayError`]
//! and wrapped in a [`LookupError`] naming the operation and repository.

pub mod error;
pub mod finder;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod pagination;
pub mod reference;

pub use error::{GatewayError, IntakeError, LookupError, LookupOperation, RateLimitInfo};
pub use finder::{PullRequestFinder, ShaStrategy, UnknownStrategy};
pub use gateway::{ListPullRequestsParams, OctocrabGateway, PullRequestGateway};
pub use locator::{PersonalAccessToken, RepositoryLocator, RepositoryName, RepositoryOwner};
pub use models::{PullRequest, PullRequestBranch};
pub use pagination::{PageRequest, PullRequestPage};

#[cfg(test)]
pub use gateway::MockPullRequestGateway;

#[cfg(test)]
mod tests;
