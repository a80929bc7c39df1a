//! Implements the Forge trait for Github
use async_trait::async_trait;
use log::*;
use octocrab::Octocrab;
use reqwest::StatusCode;

use crate::{
    error::{DigestError, Result},
    forge::{
        config::{DIFF_BASE_URL, ReleaseSource},
        traits::Forge,
        types::{
            IssueDetail, PullRequestDetail, ReleaseNotes, UserProfile,
        },
    },
};

/// GitHub forge implementation using Octocrab for API interactions and a
/// plain reqwest client for the raw diff endpoint.
pub struct Github {
    source: ReleaseSource,
    instance: Octocrab,
    diff_client: reqwest::Client,
}

impl Github {
    /// Create GitHub client with personal access token authentication.
    pub fn new(source: ReleaseSource) -> Result<Self> {
        let instance = Octocrab::builder()
            .personal_token(source.token.clone())
            .build()?;

        // the diff endpoint serves plain text and must not follow redirects
        let diff_client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            source,
            instance,
            diff_client,
        })
    }
}

#[async_trait]
impl Forge for Github {
    async fn get_release_notes(&self) -> Result<String> {
        let route = format!(
            "/repos/{}/{}/releases/tags/{}",
            self.source.owner, self.source.repo, self.source.tag
        );

        debug!("fetching release notes: {route}");

        let release: ReleaseNotes =
            self.instance.get(route, None::<&()>).await?;

        release.body.ok_or(DigestError::not_found(format!(
            "release {} has no notes",
            self.source.tag
        )))
    }

    async fn get_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<PullRequestDetail> {
        // every pull request is also an issue, and the issues endpoint
        // returns the description without the diff payload
        let route = format!("/repos/{owner}/{repo}/issues/{number}");

        debug!("fetching pull request detail: {route}");

        Ok(self.instance.get(route, None::<&()>).await?)
    }

    async fn get_issue(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<IssueDetail> {
        let route = format!("/repos/{owner}/{repo}/issues/{number}");

        debug!("fetching issue detail: {route}");

        Ok(self.instance.get(route, None::<&()>).await?)
    }

    async fn get_user(&self, login: &str) -> Result<UserProfile> {
        let route = format!("/users/{login}");

        debug!("fetching user profile: {route}");

        Ok(self.instance.get(route, None::<&()>).await?)
    }

    async fn get_diff(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<String> {
        let url =
            format!("{DIFF_BASE_URL}/{owner}/{repo}/pull/{number}.diff");

        debug!("fetching raw diff: {url}");

        let response = self.diff_client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(DigestError::not_found(format!(
                "no diff found for PR #{number}"
            )));
        }

        let response = response.error_for_status()?;

        Ok(response.text().await?)
    }
}
