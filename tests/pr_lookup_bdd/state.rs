//! Scenario state and lookup runner for the pull request lookup BDD tests.

use prfind::{
    IntakeError, OctocrabGateway, PersonalAccessToken, PullRequest, PullRequestFinder,
    RepositoryLocator,
};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use wiremock::MockServer;

use super::runtime::{SharedRuntime, ensure_runtime_and_server};

/// What a scenario looks up.
#[derive(Debug, Clone)]
pub(crate) enum LookupSubject {
    Commit(String),
    Ref(String),
}

#[derive(ScenarioState, Default)]
pub(crate) struct LookupState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) token: Slot<String>,
    pub(crate) result: Slot<Vec<PullRequest>>,
    pub(crate) error: Slot<IntakeError>,
}

/// Base URI of the scenario's mock server.
///
/// # Panics
///
/// Panics if the runtime cannot be created.
pub(crate) fn server_uri(lookup_state: &LookupState) -> String {
    ensure_runtime_and_server(&lookup_state.runtime, &lookup_state.server)
        .unwrap_or_else(|error| panic!("failed to initialise runtime: {error}"));
    lookup_state
        .server
        .with_ref(MockServer::uri)
        .unwrap_or_else(|| panic!("mock server URL missing"))
}

/// Runs a lookup against the mock server for the `owner/repo` slug.
pub(crate) fn run_lookup(
    lookup_state: &LookupState,
    slug: &str,
    subject: &LookupSubject,
) -> Result<Vec<PullRequest>, IntakeError> {
    let runtime = ensure_runtime_and_server(&lookup_state.runtime, &lookup_state.server)
        .map_err(|error| IntakeError::Io {
            message: error.to_string(),
        })?;
    let locator = RepositoryLocator::parse(&format!("{}/{slug}", server_uri(lookup_state)))?;
    let token_value = lookup_state.token.get().ok_or(IntakeError::MissingToken)?;
    let token = PersonalAccessToken::new(token_value)?;

    runtime.block_on(async {
        let gateway = OctocrabGateway::for_token(&token, &locator)?;
        let finder = PullRequestFinder::new(&gateway);

        let found = match subject {
            LookupSubject::Commit(sha) => finder.for_sha(&locator, sha).await?,
            LookupSubject::Ref(git_ref) => finder.for_ref(&locator, git_ref).await?,
        };
        Ok(found)
    })
}
