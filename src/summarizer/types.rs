/// Everything the model sees about one pull request.
#[derive(Debug, Clone)]
pub struct PullRequestData {
    pub title: String,
    pub description: String,
    /// Bodies of issues the PR closes, each prefixed with its number.
    pub related_issue_descriptions: Vec<String>,
    /// Unified diff with generated fixtures already filtered out.
    pub diff: String,
}

/// One model completion with usage metadata.
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub stop_reason: String,
    pub input_tokens: i32,
    pub output_tokens: i32,
    pub latency_ms: i64,
}
