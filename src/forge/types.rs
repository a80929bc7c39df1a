use serde::Deserialize;

/// Pull request detail fetched through the issues endpoint (every pull
/// request is also an issue on GitHub).
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestDetail {
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    pub user: Author,
}

/// Account that authored a pull request or issue.
#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    pub login: String,
}

/// Issue detail used when expanding related-issue references.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueDetail {
    #[serde(default)]
    pub body: Option<String>,
}

/// Public profile fields used for contributor acknowledgement.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub twitter_username: Option<String>,
}

/// Release lookup response; only the Markdown body is consumed.
#[derive(Debug, Deserialize)]
pub struct ReleaseNotes {
    #[serde(default)]
    pub body: Option<String>,
}
