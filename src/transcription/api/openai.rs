//! OpenAI transcription API implementation.
//!
//! Handles transcription requests to OpenAI's audio transcription endpoint
//! using multipart form data.

use serde::Deserialize;

use super::TranscriptionConfig;
use crate::audio::WAV_MIME;

/// OpenAI API response wrapper
#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    text: String,
}

/// Transcribes WAV audio bytes using OpenAI's transcription API.
///
/// Uses multipart form data with bearer token authentication.
pub async fn transcribe(
    config: &TranscriptionConfig,
    wav_bytes: Vec<u8>,
    file_name: &str,
) -> anyhow::Result<String> {
    let client = reqwest::Client::new();

    let file_part = reqwest::multipart::Part::bytes(wav_bytes)
        .file_name(file_name.to_string())
        .mime_str(WAV_MIME)
        .map_err(|e| anyhow::anyhow!("Failed to create file part for upload: {e}"))?;

    let form = reqwest::multipart::Form::new()
        .part("file", file_part)
        .text("model", config.model.api_model_name().to_string());

    let endpoint = config.model.endpoint();
    let url = format!("{endpoint}?response_format=json");

    tracing::debug!(
        "OpenAI API Call:\n  URL: {}\n  Method: POST\n  Headers:\n    Authorization: Bearer <redacted>\n    Content-Type: multipart/form-data\n  Body parameters: model={}",
        url,
        config.model.api_model_name()
    );

    let response = match client
        .post(&url)
        .bearer_auth(&config.api_key)
        .multipart(form)
        .send()
        .await
    {
        Ok(resp) => resp,
        Err(e) => {
            let error_msg = if e.is_connect() {
                "Failed to connect to OpenAI API server. Check your internet connection."
                    .to_string()
            } else if e.is_timeout() {
                "Request to OpenAI timed out. The API server is not responding.".to_string()
            } else {
                format!("OpenAI network error: {e}")
            };
            return Err(anyhow::anyhow!(error_msg));
        }
    };

    if !response.status().is_success() {
        let status = response.status();
        let error_body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        let human_readable = match status.as_u16() {
            401 => "OpenAI API key is invalid or expired. Please run 'mediascribe auth' to update your API key.".to_string(),
            403 => "You don't have permission to use OpenAI's API. Check your API key and account status.".to_string(),
            413 => "The audio file is too large for OpenAI's API. Try a shorter recording.".to_string(),
            429 => "Too many requests to OpenAI. You've hit the API rate limit. Please wait and try again.".to_string(),
            500 | 502 | 503 | 504 => "OpenAI API server is experiencing issues. Please try again later.".to_string(),
            _ => format!("OpenAI API error (status {status}): {error_body}"),
        };

        return Err(anyhow::anyhow!(human_readable));
    }

    let transcription: OpenAiResponse = response
        .json()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to parse OpenAI response: {e}"))?;

    tracing::debug!(
        "OpenAI API Response:\n  Status: Success\n  Transcription length: {} characters",
        transcription.text.len()
    );

    Ok(transcription.text)
}
