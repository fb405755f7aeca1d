//! OpenAI-compatible chat-completions client.
//!
//! Serves both OpenAI and Groq, which differ only in base URL, model name,
//! and error surface.

use serde::{Deserialize, Serialize};

use super::super::prompt::PromptRequest;
use super::super::TransformConfig;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// Runs a chat completion against the provider's endpoint.
pub async fn complete(config: &TransformConfig, request: &PromptRequest) -> anyhow::Result<String> {
    let provider_name = config.provider.name();
    let endpoint = config
        .provider
        .chat_endpoint()
        .ok_or_else(|| anyhow::anyhow!("{provider_name} has no chat-completions endpoint"))?;

    let body = ChatRequest {
        model: config.provider.chat_model(),
        messages: vec![
            ChatMessage {
                role: "system",
                content: &request.system,
            },
            ChatMessage {
                role: "user",
                content: &request.user,
            },
        ],
        temperature: request.temperature,
    };

    tracing::debug!(
        "{} chat API Call:\n  URL: {}\n  Model: {}\n  Temperature: {}",
        provider_name,
        endpoint,
        body.model,
        body.temperature
    );

    let client = reqwest::Client::new();
    let response = match client
        .post(endpoint)
        .bearer_auth(&config.api_key)
        .json(&body)
        .send()
        .await
    {
        Ok(resp) => resp,
        Err(e) => {
            let error_msg = if e.is_connect() {
                format!("Failed to connect to {provider_name} API server. Check your internet connection.")
            } else if e.is_timeout() {
                format!("Request to {provider_name} timed out. The API server is not responding.")
            } else {
                format!("{provider_name} network error: {e}")
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
            401 => format!("{provider_name} API key is invalid or expired. Please run 'mediascribe auth' to update your API key."),
            429 => format!("Too many requests to {provider_name}. You've hit the API rate limit. Please wait and try again."),
            500 | 502 | 503 | 504 => format!("{provider_name} API server is experiencing issues. Please try again later."),
            _ => format!("{provider_name} API error (status {status}): {error_body}"),
        };

        return Err(anyhow::anyhow!(human_readable));
    }

    let completion: ChatResponse = response
        .json()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to parse {provider_name} response: {e}"))?;

    completion
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| anyhow::anyhow!("{provider_name} returned no text"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization_shape() {
        let body = ChatRequest {
            model: "gpt-4o-mini",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "be brief",
                },
                ChatMessage {
                    role: "user",
                    content: "hello",
                },
            ],
            temperature: 0.2,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hello");
        assert_eq!(json["temperature"], 0.2);
    }

    #[test]
    fn test_response_parsing() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"fixed text"}}]}"#,
        )
        .unwrap();
        assert_eq!(
            response.choices[0].message.content.as_deref(),
            Some("fixed text")
        );
    }
}
