//! CLI operation handlers.
//!
//! - [`lookup`]: Find open pull requests for a commit SHA or branch ref
//!
//! Output formatting utilities are in [`output`].

pub mod lookup;
pub mod output;
