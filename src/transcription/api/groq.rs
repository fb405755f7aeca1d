//! Groq transcription API implementation.
//!
//! Groq exposes an OpenAI-compatible transcription endpoint hosting Whisper
//! models. Multipart upload with bearer auth, same as OpenAI but with its
//! own base URL and error surface.

use serde::Deserialize;

use super::TranscriptionConfig;
use crate::audio::WAV_MIME;

/// Groq returns the standard Whisper-style `{"text": "..."}` payload.
#[derive(Debug, Deserialize)]
struct GroqResponse {
    text: String,
}

/// Transcribes WAV audio bytes using Groq's Whisper API.
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
        .text("model", config.model.api_model_name().to_string())
        .text("response_format", "json".to_string());

    let url = config.model.endpoint();

    tracing::debug!(
        "Groq API Call:\n  URL: {}\n  Method: POST\n  Body parameters: model={}",
        url,
        config.model.api_model_name()
    );

    let response = match client
        .post(url)
        .bearer_auth(&config.api_key)
        .multipart(form)
        .send()
        .await
    {
        Ok(resp) => resp,
        Err(e) => {
            let error_msg = if e.is_connect() {
                "Failed to connect to Groq API server. Check your internet connection.".to_string()
            } else if e.is_timeout() {
                "Request to Groq timed out. The API server is not responding.".to_string()
            } else {
                format!("Groq network error: {e}")
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
            401 => "Groq API key is invalid or expired. Please run 'mediascribe auth' to update your API key.".to_string(),
            413 => "The audio file is too large for Groq's API. Try a shorter recording.".to_string(),
            429 => "Too many requests to Groq. You've hit the API rate limit. Please wait and try again.".to_string(),
            500 | 502 | 503 | 504 => "Groq API server is experiencing issues. Please try again later.".to_string(),
            _ => format!("Groq API error (status {status}): {error_body}"),
        };

        return Err(anyhow::anyhow!(human_readable));
    }

    let transcription: GroqResponse = response
        .json()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to parse Groq response: {e}"))?;

    Ok(transcription.text)
}
