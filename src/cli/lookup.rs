//! Open pull request lookup operation.

use std::io::{self, Write};

use prfind::{
    GatewayError, IntakeError, LookupTarget, OctocrabGateway, PersonalAccessToken, PrFindConfig,
    PullRequestFinder, PullRequestGateway, RepositoryLocator,
};
use tracing::debug;

use super::output::write_lookup_summary;

/// Looks up open pull requests for the configured SHA or ref.
///
/// # Errors
///
/// Returns [`IntakeError::Configuration`] if required configuration is missing.
/// Returns [`IntakeError::Lookup`] if a page cannot be fetched.
pub async fn run(config: &PrFindConfig) -> Result<(), IntakeError> {
    let mut stdout = io::stdout().lock();
    run_with_gateway_builder(config, OctocrabGateway::for_token, &mut stdout).await
}

/// Looks up open pull requests using a custom gateway builder.
///
/// This function is exposed for testing with mock gateways.
pub async fn run_with_gateway_builder<G, F, W>(
    config: &PrFindConfig,
    build_gateway: F,
    writer: &mut W,
) -> Result<(), IntakeError>
where
    G: PullRequestGateway,
    F: FnOnce(&PersonalAccessToken, &RepositoryLocator) -> Result<G, GatewayError>,
    W: Write,
{
    let target = config.lookup_target()?;
    let locator = config.repository_locator()?;
    let token = PersonalAccessToken::new(config.resolve_token()?)?;

    let gateway = build_gateway(&token, &locator)?;
    let finder = PullRequestFinder::new(&gateway);

    let (subject, pull_requests) = match &target {
        LookupTarget::Sha { sha, strategy } => {
            debug!(repository = %locator.slug(), head_sha = %sha, %strategy, "looking up commit");
            (
                format!("commit {sha}"),
                finder.for_sha_with(&locator, sha, *strategy).await?,
            )
        }
        LookupTarget::Ref { git_ref } => {
            debug!(repository = %locator.slug(), git_ref = %git_ref, "looking up branch");
            (
                format!("branch {git_ref}"),
                finder.for_ref(&locator, git_ref).await?,
            )
        }
    };

    write_lookup_summary(writer, &locator.slug(), &subject, &pull_requests)
}
