//! Command implementations for the release-digest CLI.

/// The single digest pipeline: fetch, extract, summarize, print.
pub mod digest;
