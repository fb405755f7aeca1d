//! Chat API clients for the text transforms.
//!
//! OpenAI and Groq share the OpenAI-compatible chat-completions shape;
//! Gemini uses `generateContent`. The router hides the difference from the
//! transform operations.

mod chat;
mod gemini;

use super::prompt::PromptRequest;
use super::TransformConfig;
use crate::transcription::Provider;

/// Runs a prompt against the configured provider's chat model and returns
/// the model's text reply, trimmed.
///
/// # Errors
/// - If the API request fails due to network issues
/// - If the API returns an HTTP error
/// - If the response contains no text
pub async fn complete(config: &TransformConfig, request: PromptRequest) -> anyhow::Result<String> {
    let result = match config.provider {
        Provider::OpenAI | Provider::Groq => chat::complete(config, &request).await,
        Provider::Gemini => gemini::complete(config, &request).await,
    }?;

    Ok(result.trim().to_string())
}
