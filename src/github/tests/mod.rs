//! Unit tests for repository locators, tokens, and page types.

use rstest::rstest;

use super::{IntakeError, PageRequest, PersonalAccessToken, PullRequestPage, RepositoryLocator};

#[rstest]
fn parses_repository_url() {
    let locator = RepositoryLocator::parse("https://github.com/octo/repo")
        .expect("should parse repository URL");
    assert_eq!(locator.owner().as_str(), "octo", "owner mismatch");
    assert_eq!(locator.repository().as_str(), "repo", "repository mismatch");
    assert_eq!(
        locator.api_base().as_str(),
        "https://api.github.com/",
        "api base mismatch"
    );
}

#[rstest]
#[case::trailing_path("https://github.com/octo/repo/pulls")]
#[case::git_suffix("https://github.com/octo/repo.git")]
#[case::trailing_slash("https://github.com/octo/repo/")]
fn parses_repository_url_variants(#[case] input: &str) {
    let locator = RepositoryLocator::parse(input).expect("should parse repository URL");
    assert_eq!(locator.slug(), "octo/repo", "slug mismatch for {input}");
}

#[rstest]
fn parses_enterprise_repository_url() {
    let locator = RepositoryLocator::parse("https://ghe.example.com/foo/bar")
        .expect("should parse enterprise repository URL");
    assert_eq!(
        locator.api_base().as_str(),
        "https://ghe.example.com/api/v3",
        "enterprise api base mismatch"
    );
}

#[rstest]
fn enterprise_api_base_keeps_port() {
    let locator = RepositoryLocator::parse("http://127.0.0.1:8080/foo/bar")
        .expect("should parse local repository URL");
    assert_eq!(
        locator.api_base().as_str(),
        "http://127.0.0.1:8080/api/v3",
        "api base should keep scheme and port"
    );
}

#[rstest]
#[case::missing_repo("https://github.com/octo")]
#[case::missing_both("https://github.com/")]
fn rejects_incomplete_repository_url(#[case] input: &str) {
    let result = RepositoryLocator::parse(input);
    assert!(
        matches!(result, Err(IntakeError::MissingPathSegments)),
        "expected MissingPathSegments for {input}, got {result:?}"
    );
}

#[rstest]
fn rejects_invalid_url() {
    let result = RepositoryLocator::parse("octo/repo");
    assert!(
        matches!(result, Err(IntakeError::InvalidUrl(_))),
        "expected InvalidUrl for malformed URL, got {result:?}"
    );
}

#[rstest]
fn repository_locator_from_owner_repo_builds_paths() {
    let locator =
        RepositoryLocator::from_owner_repo("octo", "repo").expect("should create locator");
    assert_eq!(locator.pulls_path().ok().as_deref(), Some("/repos/octo/repo/pulls"));
    assert_eq!(
        locator.commit_pulls_path("abc123").ok().as_deref(),
        Some("/repos/octo/repo/commits/abc123/pulls")
    );
}

#[rstest]
#[case::slash("a/b", "/repos/octo/repo/commits/a%2Fb/pulls")]
#[case::query("abc?state=closed", "/repos/octo/repo/commits/abc%3Fstate=closed/pulls")]
#[case::fragment("abc#frag", "/repos/octo/repo/commits/abc%23frag/pulls")]
fn commit_pulls_path_keeps_sha_in_one_segment(#[case] sha: &str, #[case] expected: &str) {
    let locator =
        RepositoryLocator::from_owner_repo("octo", "repo").expect("should create locator");
    assert_eq!(
        locator.commit_pulls_path(sha).ok().as_deref(),
        Some(expected),
        "unexpected path for {sha:?}"
    );
}

#[rstest]
fn enterprise_paths_exclude_api_prefix() {
    let locator = RepositoryLocator::parse("https://ghe.example.com/octo/repo")
        .expect("should parse enterprise repository URL");
    assert_eq!(locator.pulls_path().ok().as_deref(), Some("/repos/octo/repo/pulls"));
}

#[rstest]
#[case::empty_owner("", "repo")]
#[case::empty_repo("octo", "")]
fn repository_locator_rejects_empty_segments(#[case] owner: &str, #[case] repo: &str) {
    let result = RepositoryLocator::from_owner_repo(owner, repo);
    assert!(
        matches!(result, Err(IntakeError::MissingPathSegments)),
        "expected MissingPathSegments, got {result:?}"
    );
}

#[rstest]
#[case::empty("")]
#[case::whitespace("   ")]
fn rejects_blank_token(#[case] token: &str) {
    let result = PersonalAccessToken::new(token);
    assert!(
        matches!(result, Err(IntakeError::MissingToken)),
        "expected MissingToken, got {result:?}"
    );
}

#[rstest]
fn token_debug_output_is_redacted() {
    let token = PersonalAccessToken::new(" ghp_secret ").expect("token should be valid");
    assert_eq!(token.value(), "ghp_secret", "token should be trimmed");
    assert!(
        !format!("{token:?}").contains("ghp_secret"),
        "debug output must not leak the token"
    );
}

#[rstest]
#[case::exhausted(0, None)]
#[case::more(4, Some(4))]
fn page_cursor_zero_means_exhausted(#[case] next_page: u32, #[case] expected: Option<u32>) {
    let page = PullRequestPage::new(Vec::new(), next_page);
    assert_eq!(page.next(), expected);
}

#[rstest]
fn page_request_keeps_size_when_moving() {
    let request = PageRequest::new(1, 25).at(7);
    assert_eq!(request.page(), 7);
    assert_eq!(request.per_page(), 25);
}
