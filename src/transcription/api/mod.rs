//! Transcription API client with provider-specific implementations.
//!
//! Routes requests to the appropriate provider implementation based on the
//! configured model. OpenAI and Groq take a multipart upload of the WAV
//! bytes; Gemini takes them inline as base64 in a JSON request.

mod gemini;
mod groq;
mod openai;

use super::model::TranscriptionModel;
use super::provider::Provider;
use crate::config::file::ProvidersConfig;

/// Configuration for transcription requests
#[derive(Debug, Clone)]
pub struct TranscriptionConfig {
    /// The model to use
    pub model: TranscriptionModel,
    /// The API key for authentication
    pub api_key: String,
    /// Provider-specific configurations
    pub providers: ProvidersConfig,
}

impl TranscriptionConfig {
    /// Creates a new transcription configuration
    pub fn new(model: TranscriptionModel, api_key: String, providers: ProvidersConfig) -> Self {
        Self {
            model,
            api_key,
            providers,
        }
    }
}

/// Transcribes WAV audio bytes using the configured transcription model.
///
/// The audio must already be encoded as WAV (`audio/wav`); the caller is
/// responsible for extracting and encoding it locally so only the compact
/// uncompressed audio ships to the provider, never a full video payload.
///
/// # Errors
/// - If the API request fails due to network issues (connection, timeout)
/// - If the API returns an HTTP error (401 for invalid key, 429 for rate limit, etc.)
/// - If the API response cannot be parsed
pub async fn transcribe(
    config: &TranscriptionConfig,
    wav_bytes: Vec<u8>,
    file_name: &str,
) -> anyhow::Result<String> {
    tracing::info!(
        "Transcribing {} bytes with {} ({})",
        wav_bytes.len(),
        config.model.provider().name(),
        config.model.id()
    );

    let result = match config.model.provider() {
        Provider::OpenAI => openai::transcribe(config, wav_bytes, file_name).await,
        Provider::Groq => groq::transcribe(config, wav_bytes, file_name).await,
        Provider::Gemini => gemini::transcribe(config, wav_bytes).await,
    }?;

    Ok(result.trim().to_string())
}
