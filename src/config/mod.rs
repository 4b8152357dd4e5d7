//! Application configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.prfind.toml` in the current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `PRFIND_*`, plus the legacy `GITHUB_TOKEN`
//!    fallback for the token
//! 4. **Command-line arguments** – `--owner`, `--repo`, `--sha`, and so on
//!
//! # Configuration File
//!
//! ```toml
//! token = "ghp_example"
//! owner = "octocat"
//! repo = "hello-world"
//! strategy = "auto"
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::IntakeError;
use crate::github::finder::ShaStrategy;
use crate::github::locator::RepositoryLocator;

/// What the CLI should look up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupTarget {
    /// Open pull requests whose head is a commit.
    Sha {
        /// Commit SHA, full or abbreviated.
        sha: String,
        /// Search strategy.
        strategy: ShaStrategy,
    },
    /// Open pull requests targeting a branch.
    Ref {
        /// Branch ref, bare (`main`) or qualified (`refs/heads/main`).
        git_ref: String,
    },
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use prfind::PrFindConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = PrFindConfig::load().expect("failed to load configuration");
/// let target = config.lookup_target().expect("a SHA or ref is required");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "PRFIND",
    discovery(
        dotfile_name = ".prfind.toml",
        config_file_name = "prfind.toml",
        app_name = "prfind"
    )
)]
pub struct PrFindConfig {
    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `PRFIND_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Repository owner (e.g., "octocat").
    #[ortho_config(cli_short = 'o')]
    pub owner: Option<String>,

    /// Repository name (e.g., "hello-world").
    #[ortho_config(cli_short = 'r')]
    pub repo: Option<String>,

    /// Repository URL, used instead of owner and repo.
    ///
    /// Hosts other than `github.com` are treated as GitHub Enterprise.
    #[ortho_config(cli_short = 'u')]
    pub repo_url: Option<String>,

    /// Commit SHA to find open pull requests for.
    #[ortho_config(cli_short = 's')]
    pub sha: Option<String>,

    /// Branch ref whose open pull requests should be listed.
    #[ortho_config(cli_short = 'g')]
    pub git_ref: Option<String>,

    /// SHA lookup strategy: `auto` (default), `association`, or `scan`.
    pub strategy: Option<String>,

    /// Emits debug traces for each lookup step on stderr.
    ///
    /// Note: booleans are not loaded from the environment by `ortho_config`;
    /// use `RUST_LOG` instead.
    #[ortho_config(cli_short = 'v')]
    pub verbose: bool,
}

impl PrFindConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::MissingToken`] when no token source provides a
    /// value.
    pub fn resolve_token(&self) -> Result<String, IntakeError> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .ok_or(IntakeError::MissingToken)
    }

    /// Builds the repository locator from `repo_url` or `owner`/`repo`.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Configuration`] when neither form is complete,
    /// or when both are given, and propagates locator validation errors.
    pub fn repository_locator(&self) -> Result<RepositoryLocator, IntakeError> {
        match (&self.repo_url, &self.owner, &self.repo) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(IntakeError::Configuration {
                message: "use either --repo-url or --owner/--repo, not both".to_owned(),
            }),
            (Some(url), None, None) => RepositoryLocator::parse(url),
            (None, Some(owner), Some(repo)) => RepositoryLocator::from_owner_repo(owner, repo),
            (None, None, _) => Err(IntakeError::Configuration {
                message: "repository owner is required (use --owner or -o)".to_owned(),
            }),
            (None, _, None) => Err(IntakeError::Configuration {
                message: "repository name is required (use --repo or -r)".to_owned(),
            }),
        }
    }

    /// Parses the configured SHA strategy, defaulting to
    /// [`ShaStrategy::Auto`].
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Configuration`] for unknown strategy names.
    pub fn sha_strategy(&self) -> Result<ShaStrategy, IntakeError> {
        self.strategy.as_deref().map_or(Ok(ShaStrategy::Auto), |value| {
            value
                .parse::<ShaStrategy>()
                .map_err(|error| IntakeError::Configuration {
                    message: error.to_string(),
                })
        })
    }

    /// Determines what to look up.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Configuration`] when neither or both of `sha`
    /// and `git_ref` are set, when either is blank, or when the strategy is
    /// unknown.
    pub fn lookup_target(&self) -> Result<LookupTarget, IntakeError> {
        match (non_blank(self.sha.as_deref()), non_blank(self.git_ref.as_deref())) {
            (Some(_), Some(_)) => Err(IntakeError::Configuration {
                message: "use either --sha or --git-ref, not both".to_owned(),
            }),
            (Some(sha), None) => Ok(LookupTarget::Sha {
                sha: sha.to_owned(),
                strategy: self.sha_strategy()?,
            }),
            (None, Some(git_ref)) => Ok(LookupTarget::Ref {
                git_ref: git_ref.to_owned(),
            }),
            (None, None) => Err(IntakeError::Configuration {
                message: "a commit SHA (--sha) or branch ref (--git-ref) is required".to_owned(),
            }),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|trimmed| !trimmed.is_empty())
}

#[cfg(test)]
mod tests;
