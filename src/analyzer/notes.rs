//! Pull request reference extraction from release note Markdown.
use regex::Regex;
use std::{collections::HashSet, sync::LazyLock};

use crate::analyzer::types::{Category, PullRequestRef};

/// Matches either a full pull request URL or a bare #1234 reference. A
/// single alternation keeps matches in left-to-right document order.
static PR_REF_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"https://github\.com/(?P<owner>[\w.-]+)/(?P<repo>[\w.-]+)/pull/(?P<url_number>\d+)|#(?P<number>\d+)",
    )
    .unwrap()
});

/// Matches a changelog list item of the form `* title (#1234)`.
static LIST_ITEM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[*-]\s+(?P<title>.*?)\s*\(#(?P<number>\d+)\)").unwrap()
});

/// Titles of automated L1 CloudFormation resource definition updates.
static L1_TITLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^update L1 CloudFormation resource definitions").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Features,
    BugFixes,
}

/// Extract every pull request referenced by the release notes, normalized
/// to (owner, repo, number). Bare `#N` references resolve against the
/// release's own repository; full pull request URLs keep their own
/// owner/repo. Duplicates are dropped keeping the first occurrence, and
/// output order is strictly first-seen document order. Notes with no
/// references yield an empty list.
pub fn extract_pull_requests(
    owner: &str,
    repo: &str,
    body: &str,
) -> Vec<PullRequestRef> {
    let mut refs: Vec<PullRequestRef> = vec![];
    let mut seen: HashSet<(String, String, u64)> = HashSet::new();

    let mut alpha = false;
    let mut section: Option<Section> = None;

    for line in body.lines() {
        if let Some(heading) = line.strip_prefix("## ") {
            alpha = heading.contains("Alpha modules");
            section = None;
            continue;
        }

        if let Some(heading) = line.strip_prefix("### ") {
            section = if heading.contains("Features") {
                Some(Section::Features)
            } else if heading.contains("Bug Fixes") {
                Some(Section::BugFixes)
            } else {
                None
            };
            continue;
        }

        let item = LIST_ITEM_REGEX.captures(line).map(|caps| {
            let title = caps["title"].replace("**", "").trim().to_string();
            let number = caps["number"].parse::<u64>().unwrap_or_default();
            (title, number)
        });

        for caps in PR_REF_REGEX.captures_iter(line) {
            let (ref_owner, ref_repo, number) =
                if let Some(url_number) = caps.name("url_number") {
                    let Ok(number) = url_number.as_str().parse::<u64>()
                    else {
                        continue;
                    };
                    (
                        caps["owner"].to_string(),
                        caps["repo"].to_string(),
                        number,
                    )
                } else {
                    let Ok(number) = caps["number"].parse::<u64>() else {
                        continue;
                    };
                    (owner.to_string(), repo.to_string(), number)
                };

            if !seen.insert((ref_owner.clone(), ref_repo.clone(), number)) {
                continue;
            }

            let title = item
                .as_ref()
                .filter(|(_, item_number)| *item_number == number)
                .map(|(title, _)| title.clone());

            let category = categorize(section, alpha, title.as_deref());

            refs.push(PullRequestRef {
                owner: ref_owner,
                repo: ref_repo,
                number,
                title,
                category,
            });
        }
    }

    refs
}

fn categorize(
    section: Option<Section>,
    alpha: bool,
    title: Option<&str>,
) -> Category {
    if let Some(title) = title
        && L1_TITLE_REGEX.is_match(title)
    {
        return Category::L1;
    }

    match (section, alpha) {
        (Some(Section::Features), false) => Category::Feature,
        (Some(Section::Features), true) => Category::AlphaFeature,
        (Some(Section::BugFixes), false) => Category::BugFix,
        (Some(Section::BugFixes), true) => Category::AlphaBugFix,
        (None, _) => Category::Uncategorized,
    }
}
