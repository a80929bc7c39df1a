//! Prompt construction for summaries and the residency check.
use crate::summarizer::types::PullRequestData;

/// Model used for pull request summaries.
pub const SUMMARY_MODEL_ID: &str = "us.amazon.nova-lite-v1:0";

/// Model used for the short residency classification.
pub const RESIDENCY_MODEL_ID: &str = "us.amazon.nova-micro-v1:0";

/// Build the summary prompt for one pull request. The summary is written
/// for a Japanese developer audience, capped at 140 characters so it fits
/// in a single post, with module and service names kept in English.
pub fn build_summary_prompt(pr: &PullRequestData) -> String {
    format!(
        "あなたは開発者向けにOSSの新機能をTwitterで説明するDeveloper Advocateです。\
マージされたPull Requestのデータを元に、この変更の簡潔な要約を作成してください。\n\
\n\
<title>{title}</title>\n\
\n\
<description>{description}</description>\n\
\n\
<resolvedIssues>\n{issues}\n</resolvedIssues>\n\
\n\
<diff>{diff}</diff>\n\
\n\
<outputRule>140文字以内の日本語で簡潔に要約してください。\
ソフトウェアのモジュール名や機能名、サービス名は英語のままにしてください。\
最初の一文で影響のあるモジュールと簡潔な要約を示し、必要であれば次の文で\
それがどのような機能であるかの説明や、解決される問題を加えてください。\
back quoteや改行は出力しないでください。</outputRule>",
        title = pr.title,
        description = pr.description,
        issues = pr.related_issue_descriptions.join("\n==========\n"),
        diff = pr.diff,
    )
}

/// Build the residency-check prompt over a profile location. The model
/// must answer with a bare `1` (Japan-based) or `0` (not, or unsure).
pub fn build_residency_prompt(location: &str) -> String {
    format!(
        "これはGitHubアカウントのLocationにセットされた値です。\
このアカウントが日本に居住している人かどうかを判断してください。\
日本に居住している場合は1を、そうでない場合や確信が持てない場合は0を\
返してください。応答には0か1のみを含め、他の出力は含めないでください。\n\
<location>{location}</location>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pr() -> PullRequestData {
        PullRequestData {
            title: "feat(s3): add replication option".into(),
            description: "Adds the option. Closes #10.".into(),
            related_issue_descriptions: vec![
                "#10: please add replication".into(),
                "#11: related request".into(),
            ],
            diff: "diff --git a/x b/x".into(),
        }
    }

    #[test]
    fn test_summary_prompt_embeds_pr_fields() {
        let prompt = build_summary_prompt(&sample_pr());

        assert!(
            prompt.contains("<title>feat(s3): add replication option</title>")
        );
        assert!(prompt.contains("Adds the option. Closes #10."));
        assert!(prompt.contains("<diff>diff --git a/x b/x</diff>"));
    }

    #[test]
    fn test_summary_prompt_separates_issue_descriptions() {
        let prompt = build_summary_prompt(&sample_pr());

        assert!(prompt.contains(
            "#10: please add replication\n==========\n#11: related request"
        ));
    }

    #[test]
    fn test_summary_prompt_is_stable_for_same_input() {
        let pr = sample_pr();
        assert_eq!(build_summary_prompt(&pr), build_summary_prompt(&pr));
    }

    #[test]
    fn test_residency_prompt_embeds_location() {
        let prompt = build_residency_prompt("Tokyo, Japan");
        assert!(prompt.contains("<location>Tokyo, Japan</location>"));
    }
}
