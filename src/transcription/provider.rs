//! Cloud AI provider definitions.
//!
//! Defines the supported providers. Each provider has its own API endpoints
//! and authentication method, and names the chat model used for the text
//! transform operations (correction and rewriting).

use serde::{Deserialize, Serialize};

/// Represents a supported cloud AI provider
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    OpenAI,
    Groq,
    Gemini,
}

impl Provider {
    pub fn id(&self) -> &'static str {
        match self {
            Provider::OpenAI => "openai",
            Provider::Groq => "groq",
            Provider::Gemini => "gemini",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Provider::OpenAI => "OpenAI",
            Provider::Groq => "Groq",
            Provider::Gemini => "Gemini",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "openai" => Some(Provider::OpenAI),
            "groq" => Some(Provider::Groq),
            "gemini" => Some(Provider::Gemini),
            _ => None,
        }
    }

    /// The model used for text transforms (grammar correction, rewriting)
    /// on this provider.
    pub fn chat_model(&self) -> &'static str {
        match self {
            Provider::OpenAI => "gpt-4o-mini",
            Provider::Groq => "llama-3.3-70b-versatile",
            Provider::Gemini => "gemini-2.5-flash",
        }
    }

    /// The chat-completions endpoint for OpenAI-compatible providers. Gemini
    /// uses `generateContent` and has no chat-completions URL.
    pub fn chat_endpoint(&self) -> Option<&'static str> {
        match self {
            Provider::OpenAI => Some("https://api.openai.com/v1/chat/completions"),
            Provider::Groq => Some("https://api.groq.com/openai/v1/chat/completions"),
            Provider::Gemini => None,
        }
    }

    pub fn all() -> &'static [Self] {
        &[Provider::OpenAI, Provider::Groq, Provider::Gemini]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for provider in Provider::all() {
            assert_eq!(Provider::from_id(provider.id()).as_ref(), Some(provider));
        }
        assert_eq!(Provider::from_id("deepgram"), None);
    }

    #[test]
    fn test_every_provider_has_a_chat_model() {
        for provider in Provider::all() {
            assert!(!provider.chat_model().is_empty());
        }
    }
}
