//! GitHub access for release notes, pull request detail, and raw diffs.
//!
//! Provides token-based authentication and read-only lookups through a
//! common trait so the pipeline can be tested without network access.

/// Configuration for the release source being digested.
pub mod config;

/// GitHub API client implementation.
pub mod github;

/// Common trait for the forge backing a release.
pub mod traits;

/// Shared response types for pull requests, issues, and user profiles.
pub mod types;
