//! prfind CLI entrypoint for open pull request lookups.

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use prfind::{IntakeError, PrFindConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Log filter used when `--verbose` is given and `RUST_LOG` is unset.
const VERBOSE_LOG_FILTER: &str = "prfind=debug";

#[tokio::main]
async fn main() -> ExitCode {
    let outcome = run().await;
    exit_code(outcome, &mut io::stderr().lock())
}

/// Reports a failed run on `stderr` and maps the outcome to an exit status.
fn exit_code<W: Write>(outcome: Result<(), IntakeError>, stderr: &mut W) -> ExitCode {
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            // The status is all that is left to report if stderr is closed.
            let _unreported = writeln!(stderr, "{error}").is_err();
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), IntakeError> {
    let config = load_config()?;
    init_tracing(config.verbose);
    debug!(
        owner = config.owner.as_deref(),
        repo = config.repo.as_deref(),
        repo_url = config.repo_url.as_deref(),
        "configuration loaded"
    );

    cli::lookup::run(&config).await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`IntakeError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<PrFindConfig, IntakeError> {
    PrFindConfig::load().map_err(|error| IntakeError::Configuration {
        message: error.to_string(),
    })
}

/// Installs a stderr subscriber so traces never mix with lookup output.
fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A subscriber may already be installed when embedded; keep that one.
    let _already_installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .is_err();
}
