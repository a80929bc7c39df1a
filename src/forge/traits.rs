//! Traits related to the remote forge backing a release
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{
    error::Result,
    forge::types::{IssueDetail, PullRequestDetail, UserProfile},
};

/// Read-only forge operations needed to digest one release. Pull request
/// and issue lookups take an explicit owner/repo because release notes may
/// link pull requests in other repositories.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Forge: Send + Sync {
    /// Markdown body of the release the source points at.
    async fn get_release_notes(&self) -> Result<String>;

    /// Title, description, and author of a pull request.
    async fn get_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<PullRequestDetail>;

    /// Body of an issue referenced from a pull request description.
    async fn get_issue(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<IssueDetail>;

    /// Public profile of a contributor.
    async fn get_user(&self, login: &str) -> Result<UserProfile>;

    /// Raw unified diff for a pull request.
    async fn get_diff(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<String>;
}
