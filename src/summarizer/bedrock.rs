//! Implements the TextModel trait for the AWS Bedrock runtime
use async_trait::async_trait;
use aws_sdk_bedrockruntime::{
    Client,
    types::{
        ContentBlock, ConversationRole, InferenceConfiguration, Message,
    },
};
use log::*;

use crate::{
    error::{DigestError, Result},
    summarizer::{traits::TextModel, types::Completion},
};

/// Bedrock runtime client. Credentials and region come from the ambient
/// AWS environment (env vars, profile, or instance metadata).
pub struct Bedrock {
    client: Client,
}

impl Bedrock {
    /// Create a client from the default AWS configuration chain.
    pub async fn new() -> Self {
        let config = aws_config::load_defaults(
            aws_config::BehaviorVersion::latest(),
        )
        .await;

        Self {
            client: Client::new(&config),
        }
    }
}

#[async_trait]
impl TextModel for Bedrock {
    async fn converse(
        &self,
        model_id: &str,
        prompt: &str,
    ) -> Result<Completion> {
        debug!("sending converse request to model: {model_id}");

        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(prompt.to_string()))
            .build()
            .map_err(|err| DigestError::inference(err.to_string()))?;

        let inference_config = InferenceConfiguration::builder()
            .temperature(0.0)
            .build();

        let response = self
            .client
            .converse()
            .model_id(model_id)
            .messages(message)
            .inference_config(inference_config)
            .send()
            .await
            .map_err(|err| DigestError::inference(err.to_string()))?;

        let text = response
            .output()
            .and_then(|output| output.as_message().ok())
            .and_then(|message| {
                message
                    .content()
                    .iter()
                    .find_map(|block| block.as_text().ok().cloned())
            })
            .ok_or(DigestError::inference(
                "converse response contains no text block",
            ))?;

        let usage = response.usage().ok_or(DigestError::inference(
            "converse response missing token usage",
        ))?;

        let metrics = response.metrics().ok_or(DigestError::inference(
            "converse response missing metrics",
        ))?;

        Ok(Completion {
            text,
            stop_reason: response.stop_reason().as_str().to_string(),
            input_tokens: usage.input_tokens(),
            output_tokens: usage.output_tokens(),
            latency_ms: metrics.latency_ms(),
        })
    }
}
