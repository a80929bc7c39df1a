//! Extraction rules applied to pull request descriptions.
use regex::Regex;
use std::sync::LazyLock;

/// Matches issue-closing keywords in any inflection, e.g. "Closes #123",
/// "fixed #45", "Resolve #6".
static RELATED_ISSUE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:close[sd]?|fixe?[sd]?|resolve[sd]?) #(\d+)").unwrap()
});

/// Matches new resources announced in an L1 update description.
static L1_RESOURCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\+\]\s+resource\s+(\S+)").unwrap());

/// Matches new services announced in an L1 update description.
static L1_SERVICE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\+\]\s+service\s+(\S+)").unwrap());

/// Issue numbers a pull request declares it closes, fixes, or resolves,
/// in order of appearance.
pub fn related_issues(body: &str) -> Vec<u64> {
    RELATED_ISSUE_REGEX
        .captures_iter(body)
        .filter_map(|caps| caps[1].parse::<u64>().ok())
        .collect()
}

/// New CloudFormation resources and services listed in an L1 update
/// description. Resources are reported before services.
pub fn l1_updates(body: &str) -> Vec<String> {
    let mut updates: Vec<String> = vec![];

    for caps in L1_RESOURCE_REGEX.captures_iter(body) {
        updates.push(caps[1].to_string());
    }

    for caps in L1_SERVICE_REGEX.captures_iter(body) {
        updates.push(caps[1].to_string());
    }

    updates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_related_issues_matches_all_keywords() {
        let body = "Closes #10. fixed #20, Resolve #30 and fix #40.";
        assert_eq!(related_issues(body), vec![10, 20, 30, 40]);
    }

    #[test]
    fn test_related_issues_is_case_insensitive() {
        let body = "FIXES #7";
        assert_eq!(related_issues(body), vec![7]);
    }

    #[test]
    fn test_related_issues_ignores_plain_references() {
        let body = "See #10 for background, closes #11.";
        assert_eq!(related_issues(body), vec![11]);
    }

    #[test]
    fn test_related_issues_empty_for_no_matches() {
        assert!(related_issues("nothing to see here").is_empty());
    }

    #[test]
    fn test_l1_updates_collects_resources_then_services() {
        let body = r#"
[+] service aws-newthing
[+] resource AWS::S3::BucketPolicy
[+] resource AWS::Lambda::Alias
[~] resource AWS::EC2::Instance
"#;

        assert_eq!(
            l1_updates(body),
            vec![
                "AWS::S3::BucketPolicy".to_string(),
                "AWS::Lambda::Alias".to_string(),
                "aws-newthing".to_string(),
            ]
        );
    }

    #[test]
    fn test_l1_updates_empty_for_no_additions() {
        let body = "[~] resource AWS::EC2::Instance";
        assert!(l1_updates(body).is_empty());
    }
}
