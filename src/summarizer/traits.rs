//! Traits related to hosted text-generation models
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{error::Result, summarizer::types::Completion};

/// Single-turn text generation against a hosted model.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Send one user prompt to the given model and return the completion
    /// with usage metadata. Deterministic settings (temperature 0).
    async fn converse(
        &self,
        model_id: &str,
        prompt: &str,
    ) -> Result<Completion>;
}
