//! Gemini text-generation client for the transforms.
//!
//! Uses `generateContent` with a system instruction, mirroring the chat
//! shape the OpenAI-compatible providers use.

use serde::{Deserialize, Serialize};

use super::super::prompt::PromptRequest;
use super::super::TransformConfig;

const GEMINI_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    max_output_tokens: u32,
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

/// Runs a prompt against a Gemini chat model.
pub async fn complete(config: &TransformConfig, request: &PromptRequest) -> anyhow::Result<String> {
    let body = GenerateContentRequest {
        system_instruction: Content {
            parts: vec![TextPart {
                text: &request.system,
            }],
        },
        contents: vec![Content {
            parts: vec![TextPart {
                text: &request.user,
            }],
        }],
        generation_config: GenerationConfig {
            temperature: request.temperature,
            max_output_tokens: config.providers.gemini.max_output_tokens,
        },
    };

    let url = format!(
        "{}/{}:generateContent",
        GEMINI_BASE,
        config.provider.chat_model()
    );

    tracing::debug!(
        "Gemini chat API Call:\n  URL: {}\n  Temperature: {}",
        url,
        request.temperature
    );

    let client = reqwest::Client::new();
    let response = match client
        .post(&url)
        .header("x-goog-api-key", &config.api_key)
        .json(&body)
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
            401 | 403 => "Gemini API key is invalid or lacks permission. Please run 'mediascribe auth' to update your API key.".to_string(),
            429 => "Too many requests to Gemini. You've hit the API rate limit. Please wait and try again.".to_string(),
            500 | 502 | 503 | 504 => "Gemini API server is experiencing issues. Please try again later.".to_string(),
            _ => format!("Gemini API error (status {status}): {error_body}"),
        };

        return Err(anyhow::anyhow!(human_readable));
    }

    let completion: GenerateContentResponse = response
        .json()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to parse Gemini response: {e}"))?;

    completion
        .candidates
        .and_then(|c| c.into_iter().next())
        .and_then(|c| c.content)
        .and_then(|c| c.parts)
        .map(|parts| {
            parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .filter(|text| !text.is_empty())
        .ok_or_else(|| anyhow::anyhow!("Gemini returned no text"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization_shape() {
        let body = GenerateContentRequest {
            system_instruction: Content {
                parts: vec![TextPart { text: "be brief" }],
            },
            contents: vec![Content {
                parts: vec![TextPart { text: "hello" }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.4,
                max_output_tokens: 8192,
            },
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "be brief");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 8192);
    }
}
