/// Section-derived category for a referenced pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Feature,
    BugFix,
    AlphaFeature,
    AlphaBugFix,
    /// Automated L1 CloudFormation resource definition updates. These carry
    /// machine-generated diffs and are listed instead of summarized.
    L1,
    /// Reference found outside any recognized section.
    Uncategorized,
}

impl Category {
    /// Human-readable label used in output blocks.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Feature => "feature",
            Category::BugFix => "bug fix",
            Category::AlphaFeature => "alpha feature",
            Category::AlphaBugFix => "alpha bug fix",
            Category::L1 => "L1",
            Category::Uncategorized => "uncategorized",
        }
    }
}

/// A pull request referenced by release notes. Identity for deduplication
/// is (owner, repo, number); title and category are presentation metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRef {
    pub owner: String,
    pub repo: String,
    pub number: u64,
    /// Bullet title when the reference came from a changelog list item.
    pub title: Option<String>,
    pub category: Category,
}
