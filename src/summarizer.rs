//! Model-backed summarization of pull requests via AWS Bedrock.

/// Bedrock runtime implementation of the text model trait.
pub mod bedrock;

/// High-level summarization operations over any text model.
pub mod manager;

/// Prompt construction for summaries and the residency check.
pub mod prompt;

/// Common trait for hosted text-generation models.
pub mod traits;

/// Shared types for model input and completions.
pub mod types;
