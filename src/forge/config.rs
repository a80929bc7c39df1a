//! Configuration for the GitHub release being digested.
use secrecy::SecretString;

/// Base URL for fetching raw pull request diffs outside the REST API.
pub const DIFF_BASE_URL: &str = "https://patch-diff.githubusercontent.com/raw";

/// Identifies one release on GitHub along with the token used to read it.
#[derive(Debug, Clone)]
pub struct ReleaseSource {
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Release tag (e.g., "v2.172.0").
    pub tag: String,
    /// Access token for authentication.
    pub token: SecretString,
}

impl Default for ReleaseSource {
    fn default() -> Self {
        Self {
            owner: "".to_string(),
            repo: "".to_string(),
            tag: "".to_string(),
            token: SecretString::from("".to_string()),
        }
    }
}
