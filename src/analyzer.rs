//! Pure text analysis of release notes, pull request descriptions, and
//! diffs. No module here touches the network, which keeps every extraction
//! rule testable offline.

/// Unified diff chunk filtering.
pub mod diff;

/// Related-issue and L1 construct extraction from PR descriptions.
pub mod issues;

/// Pull request reference extraction from release notes.
pub mod notes;

/// Shared types for extracted pull request references.
pub mod types;
