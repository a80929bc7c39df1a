//! High-level summarization operations over any text model.
use log::*;

use crate::{
    error::Result,
    summarizer::{
        prompt::{
            RESIDENCY_MODEL_ID, SUMMARY_MODEL_ID, build_residency_prompt,
            build_summary_prompt,
        },
        traits::TextModel,
        types::{Completion, PullRequestData},
    },
};

/// Wraps a text model with the fixed prompts used by the digest pipeline.
pub struct Summarizer {
    model: Box<dyn TextModel>,
}

impl Summarizer {
    pub fn new(model: Box<dyn TextModel>) -> Self {
        Self { model }
    }

    /// Generate the summary for one pull request. A truncated completion
    /// is still returned; the unexpected stop reason is only logged.
    pub async fn summarize(
        &self,
        pr: &PullRequestData,
    ) -> Result<Completion> {
        let prompt = build_summary_prompt(pr);

        let completion =
            self.model.converse(SUMMARY_MODEL_ID, &prompt).await?;

        if completion.stop_reason != "end_turn" {
            warn!("unexpected stop reason: {}", completion.stop_reason);
        }

        Ok(completion)
    }

    /// Classify a profile location as Japan-based. The model must answer
    /// with a bare `0` or `1`; anything else counts as not Japan-based.
    pub async fn is_japan_based(&self, location: &str) -> Result<bool> {
        let prompt = build_residency_prompt(location);

        let completion =
            self.model.converse(RESIDENCY_MODEL_ID, &prompt).await?;

        match completion.text.trim() {
            "1" => Ok(true),
            "0" => Ok(false),
            other => {
                warn!(
                    "unexpected residency response: {other} for location: {location}"
                );
                Ok(false)
            }
        }
    }
}
