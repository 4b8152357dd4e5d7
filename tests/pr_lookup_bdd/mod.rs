//! Support modules for the pull request lookup BDD tests.

#[path = "../support/runtime.rs"]
pub(crate) mod runtime;
pub(crate) mod state;

pub(crate) use state::{LookupState, LookupSubject, run_lookup, server_uri};
