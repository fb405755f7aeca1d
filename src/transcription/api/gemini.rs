//! Google Gemini transcription implementation.
//!
//! Gemini's `generateContent` endpoint takes audio inline in the JSON
//! request: the WAV bytes are base64-encoded and tagged with their MIME
//! type, paired with a text instruction asking for a verbatim transcript.

use base64::Engine;
use serde::{Deserialize, Serialize};

use super::TranscriptionConfig;
use crate::audio::WAV_MIME;

const TRANSCRIBE_INSTRUCTION: &str =
    "Transcribe this audio recording verbatim. Output only the spoken text, \
     with sensible punctuation. Do not add commentary, labels, or timestamps.";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
enum Part {
    #[serde(rename = "inlineData", rename_all = "camelCase")]
    InlineData { mime_type: String, data: String },
    #[serde(rename = "text")]
    Text(String),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Transcribes WAV audio bytes using Gemini's multimodal API.
pub async fn transcribe(config: &TranscriptionConfig, wav_bytes: Vec<u8>) -> anyhow::Result<String> {
    let encoded = base64::engine::general_purpose::STANDARD.encode(&wav_bytes);
    tracing::debug!(
        "Gemini upload: {} WAV bytes -> {} base64 characters",
        wav_bytes.len(),
        encoded.len()
    );

    let request = GenerateContentRequest {
        contents: vec![Content {
            parts: vec![
                Part::InlineData {
                    mime_type: WAV_MIME.to_string(),
                    data: encoded,
                },
                Part::Text(TRANSCRIBE_INSTRUCTION.to_string()),
            ],
        }],
        // Verbatim transcription wants no creativity
        generation_config: GenerationConfig { temperature: 0.0 },
    };

    let url = format!(
        "{}/{}:generateContent",
        config.model.endpoint(),
        config.model.api_model_name()
    );

    let client = reqwest::Client::new();
    let response = match client
        .post(&url)
        .header("x-goog-api-key", &config.api_key)
        .json(&request)
        .send()
        .await
    {
        Ok(resp) => resp,
        Err(e) => {
            let error_msg = if e.is_connect() {
                "Failed to connect to Gemini API server. Check your internet connection."
                    .to_string()
            } else if e.is_timeout() {
                "Request to Gemini timed out. The API server is not responding.".to_string()
            } else {
                format!("Gemini network error: {e}")
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
            400 => format!("Gemini rejected the request: {error_body}"),
            401 | 403 => "Gemini API key is invalid or lacks permission. Please run 'mediascribe auth' to update your API key.".to_string(),
            429 => "Too many requests to Gemini. You've hit the API rate limit. Please wait and try again.".to_string(),
            500 | 502 | 503 | 504 => "Gemini API server is experiencing issues. Please try again later.".to_string(),
            _ => format!("Gemini API error (status {status}): {error_body}"),
        };

        return Err(anyhow::anyhow!(human_readable));
    }

    let body: GenerateContentResponse = response
        .json()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to parse Gemini response: {e}"))?;

    extract_text(body).ok_or_else(|| anyhow::anyhow!("Gemini returned no transcription text"))
}

/// Pulls the concatenated text parts out of the first candidate.
fn extract_text(response: GenerateContentResponse) -> Option<String> {
    let parts = response
        .candidates?
        .into_iter()
        .next()?
        .content?
        .parts?;

    let text: String = parts
        .into_iter()
        .filter_map(|p| p.text)
        .collect::<Vec<_>>()
        .join("");

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization_shape() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::InlineData {
                        mime_type: WAV_MIME.to_string(),
                        data: "AAAA".to_string(),
                    },
                    Part::Text("transcribe".to_string()),
                ],
            }],
            generation_config: GenerationConfig { temperature: 0.0 },
        };

        let json = serde_json::to_value(&request).unwrap();
        let part = &json["contents"][0]["parts"][0];
        assert_eq!(part["inlineData"]["mimeType"], "audio/wav");
        assert_eq!(part["inlineData"]["data"], "AAAA");
        assert_eq!(json["contents"][0]["parts"][1]["text"], "transcribe");
        assert_eq!(json["generationConfig"]["temperature"], 0.0);
    }

    #[test]
    fn test_extract_text_from_response() {
        let body: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"hello "},{"text":"world"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(body).unwrap(), "hello world");
    }

    #[test]
    fn test_extract_text_empty_candidates() {
        let body: GenerateContentResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(extract_text(body).is_none());
    }
}
