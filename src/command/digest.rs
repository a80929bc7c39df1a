//! Release digest pipeline implementation.
use log::*;
use std::io::Write;

use crate::{
    analyzer::{
        diff, issues, notes,
        types::{Category, PullRequestRef},
    },
    cli,
    error::Result,
    forge::{config::ReleaseSource, github::Github, traits::Forge},
    summarizer::{
        bedrock::Bedrock, manager::Summarizer, types::PullRequestData,
    },
};

/// Execute the digest command: resolve the release source, build the
/// GitHub and Bedrock clients, and run the pipeline against stdout.
pub async fn execute(args: &cli::Args) -> Result<()> {
    let source = args.get_release_source()?;

    let forge = Github::new(source.clone())?;
    let model = Bedrock::new().await;
    let summarizer = Summarizer::new(Box::new(model));

    let mut stdout = std::io::stdout();

    run(&source, &forge, &summarizer, &mut stdout).await
}

/// Run the pipeline: one release fetch, one extraction pass, then one
/// sequential loop making one detail fetch and one model call per
/// reference. The loop halts at the first error; blocks already written
/// stay emitted.
pub async fn run<W: Write>(
    source: &ReleaseSource,
    forge: &dyn Forge,
    summarizer: &Summarizer,
    out: &mut W,
) -> Result<()> {
    info!(
        "fetching release notes for {}/{} {}",
        source.owner, source.repo, source.tag
    );

    let body = forge.get_release_notes().await?;

    let refs =
        notes::extract_pull_requests(&source.owner, &source.repo, &body);

    if refs.is_empty() {
        warn!("release notes reference no pull requests");
        return Ok(());
    }

    info!("release references {} pull requests", refs.len());

    let mut l1_updates: Vec<String> = vec![];
    let mut contributors: Vec<(String, u64)> = vec![];

    for pr_ref in &refs {
        digest_pull_request(
            pr_ref,
            forge,
            summarizer,
            &mut l1_updates,
            &mut contributors,
            out,
        )
        .await?;
    }

    if !l1_updates.is_empty() {
        writeln!(out, "L1コンストラクト追加: \n{}\n", l1_updates.join("\n"))?;
    }

    if !contributors.is_empty() {
        let messages: Vec<String> = contributors
            .iter()
            .map(|(handle, count)| {
                if *count > 1 {
                    format!("@{handle} ({count}件)")
                } else {
                    format!("@{handle}")
                }
            })
            .collect();

        writeln!(
            out,
            "バグ修正およびalphaモジュールへの貢献: Thank you {}!!",
            messages.join(", ")
        )?;
        writeln!(out)?;
    }

    Ok(())
}

/// Process one referenced pull request: summarize it and print its block,
/// or fold an L1 update into the aggregate list.
async fn digest_pull_request<W: Write>(
    pr_ref: &PullRequestRef,
    forge: &dyn Forge,
    summarizer: &Summarizer,
    l1_updates: &mut Vec<String>,
    contributors: &mut Vec<(String, u64)>,
    out: &mut W,
) -> Result<()> {
    let detail = forge
        .get_pull_request(&pr_ref.owner, &pr_ref.repo, pr_ref.number)
        .await?;

    let description = detail.body.clone().unwrap_or_default();

    if pr_ref.category == Category::L1 {
        l1_updates.extend(issues::l1_updates(&description));
        return Ok(());
    }

    let related = issues::related_issues(&description);

    let mut related_descriptions = Vec::with_capacity(related.len());
    for issue_number in &related {
        let issue = forge
            .get_issue(&pr_ref.owner, &pr_ref.repo, *issue_number)
            .await?;
        related_descriptions.push(format!(
            "#{}: {}",
            issue_number,
            issue.body.unwrap_or_default()
        ));
    }

    let raw_diff = forge
        .get_diff(&pr_ref.owner, &pr_ref.repo, pr_ref.number)
        .await?;

    let data = PullRequestData {
        title: pr_ref.title.clone().unwrap_or_else(|| detail.title.clone()),
        description,
        related_issue_descriptions: related_descriptions,
        diff: diff::filter_snapshot_chunks(&raw_diff),
    };

    let completion = summarizer.summarize(&data).await?;

    let profile = forge.get_user(&detail.user.login).await?;

    let mut japan_based = false;
    if let Some(location) = &profile.location {
        japan_based = summarizer.is_japan_based(location).await?;
    }

    let mut thank_you = String::new();
    if japan_based && let Some(handle) = &profile.twitter_username {
        if pr_ref.category == Category::Feature {
            thank_you = format!(" Thank you @{handle}!");
        } else if let Some(entry) =
            contributors.iter_mut().find(|(h, _)| h == handle)
        {
            entry.1 += 1;
        } else {
            contributors.push((handle.clone(), 1));
        }
    }

    let related_marker = if related.is_empty() {
        String::new()
    } else {
        format!(
            "\u{f188} {}",
            related
                .iter()
                .map(u64::to_string)
                .collect::<Vec<String>>()
                .join(",")
        )
    };

    let link = format!(
        "https://github.com/{}/{}/pull/{}",
        pr_ref.owner, pr_ref.repo, pr_ref.number
    );

    writeln!(
        out,
        "\u{f09b} ({}) {} {} \u{eb72} @{} {}",
        pr_ref.category.label(),
        data.title,
        link,
        detail.user.login,
        related_marker
    )?;
    writeln!(
        out,
        "\u{f062} {} \u{f063} {} ({}ms) \u{f031} {}",
        completion.input_tokens,
        completion.output_tokens,
        completion.latency_ms,
        completion.text.chars().count()
    )?;
    writeln!(out, "{}{}", completion.text, thank_you)?;
    writeln!(out)?;

    Ok(())
}
