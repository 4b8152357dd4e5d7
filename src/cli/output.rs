//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use prfind::{IntakeError, PullRequest};

/// Writes the pull requests found by a lookup to the given writer.
///
/// `subject` names what was looked up, such as `commit abc123` or
/// `branch main`.
///
/// # Errors
///
/// Returns [`IntakeError::Io`] when writing fails.
pub fn write_lookup_summary<W: Write>(
    writer: &mut W,
    slug: &str,
    subject: &str,
    pull_requests: &[PullRequest],
) -> Result<(), IntakeError> {
    if pull_requests.is_empty() {
        return writeln!(writer, "No open pull requests found.").map_err(|e| io_error(&e));
    }

    writeln!(writer, "Open pull requests for {subject} in {slug}:").map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;

    for pr in pull_requests {
        let title = pr.title.as_deref().unwrap_or("(no title)");
        let state = pr.state.as_deref().unwrap_or("unknown");
        let head = pr.head_sha().unwrap_or("unknown");
        let base = pr.base_ref().unwrap_or("unknown");
        writeln!(
            writer,
            "  #{} [{state}] {title} (head {head}, base {base})",
            pr.number
        )
        .map_err(|e| io_error(&e))?;
    }

    Ok(())
}

/// Converts an I/O error to an [`IntakeError::Io`].
pub(crate) fn io_error(error: &io::Error) -> IntakeError {
    IntakeError::Io {
        message: error.to_string(),
    }
}
