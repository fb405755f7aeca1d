//! Transcription model definitions and metadata.
//!
//! Defines the supported transcription models with their associated
//! providers, API endpoints, and model names.

use serde::{Deserialize, Serialize};

use super::provider::Provider;

/// Represents a supported transcription model
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TranscriptionModel {
    /// OpenAI GPT-4o Transcribe model (latest, best accuracy)
    Gpt4oTranscribe,
    /// OpenAI GPT-4o Mini Transcribe model (faster, lighter)
    Gpt4oMiniTranscribe,
    /// OpenAI Whisper model (legacy)
    Whisper,
    /// Groq-hosted Whisper Large v3 Turbo (fast, cheap)
    WhisperLargeV3Turbo,
    /// Google Gemini 2.5 Flash (multimodal, takes audio inline)
    Gemini25Flash,
}

impl TranscriptionModel {
    /// Returns the provider for this model
    pub fn provider(&self) -> Provider {
        match self {
            TranscriptionModel::Gpt4oTranscribe
            | TranscriptionModel::Gpt4oMiniTranscribe
            | TranscriptionModel::Whisper => Provider::OpenAI,
            TranscriptionModel::WhisperLargeV3Turbo => Provider::Groq,
            TranscriptionModel::Gemini25Flash => Provider::Gemini,
        }
    }

    /// Returns the model identifier as a string
    pub fn id(&self) -> &'static str {
        match self {
            TranscriptionModel::Gpt4oTranscribe => "gpt-4o-transcribe",
            TranscriptionModel::Gpt4oMiniTranscribe => "gpt-4o-mini-transcribe",
            TranscriptionModel::Whisper => "whisper",
            TranscriptionModel::WhisperLargeV3Turbo => "whisper-large-v3-turbo",
            TranscriptionModel::Gemini25Flash => "gemini-2.5-flash",
        }
    }

    /// Returns a human-readable description of the model
    pub fn description(&self) -> &'static str {
        match self {
            TranscriptionModel::Gpt4oTranscribe => "GPT-4o Transcribe (latest, best accuracy)",
            TranscriptionModel::Gpt4oMiniTranscribe => "GPT-4o Mini Transcribe (faster, lighter)",
            TranscriptionModel::Whisper => "Whisper (legacy)",
            TranscriptionModel::WhisperLargeV3Turbo => "Whisper Large v3 Turbo (fast, cheap)",
            TranscriptionModel::Gemini25Flash => "Gemini 2.5 Flash (multimodal)",
        }
    }

    /// Returns the API endpoint for this model
    pub fn endpoint(&self) -> &'static str {
        match self {
            TranscriptionModel::Gpt4oTranscribe
            | TranscriptionModel::Gpt4oMiniTranscribe
            | TranscriptionModel::Whisper => "https://api.openai.com/v1/audio/transcriptions",
            TranscriptionModel::WhisperLargeV3Turbo => {
                "https://api.groq.com/openai/v1/audio/transcriptions"
            }
            TranscriptionModel::Gemini25Flash => {
                "https://generativelanguage.googleapis.com/v1beta/models"
            }
        }
    }

    /// Returns the model name to send to the API
    pub fn api_model_name(&self) -> &'static str {
        match self {
            TranscriptionModel::Gpt4oTranscribe => "gpt-4o-transcribe",
            TranscriptionModel::Gpt4oMiniTranscribe => "gpt-4o-mini-transcribe",
            TranscriptionModel::Whisper => "whisper-1",
            TranscriptionModel::WhisperLargeV3Turbo => "whisper-large-v3-turbo",
            TranscriptionModel::Gemini25Flash => "gemini-2.5-flash",
        }
    }

    /// Parses a model ID string into a TranscriptionModel
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "gpt-4o-transcribe" => Some(TranscriptionModel::Gpt4oTranscribe),
            "gpt-4o-mini-transcribe" => Some(TranscriptionModel::Gpt4oMiniTranscribe),
            "whisper" => Some(TranscriptionModel::Whisper),
            "whisper-large-v3-turbo" => Some(TranscriptionModel::WhisperLargeV3Turbo),
            "gemini-2.5-flash" => Some(TranscriptionModel::Gemini25Flash),
            _ => None,
        }
    }

    /// Returns all available models
    pub fn all() -> &'static [Self] {
        &[
            TranscriptionModel::Gpt4oTranscribe,
            TranscriptionModel::Gpt4oMiniTranscribe,
            TranscriptionModel::Whisper,
            TranscriptionModel::WhisperLargeV3Turbo,
            TranscriptionModel::Gemini25Flash,
        ]
    }

    /// Returns all models for a given provider
    pub fn models_for_provider(provider: &Provider) -> Vec<TranscriptionModel> {
        Self::all()
            .iter()
            .filter(|m| m.provider() == *provider)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for model in TranscriptionModel::all() {
            assert_eq!(
                TranscriptionModel::from_id(model.id()).as_ref(),
                Some(model)
            );
        }
    }

    #[test]
    fn test_every_provider_has_models() {
        for provider in Provider::all() {
            assert!(
                !TranscriptionModel::models_for_provider(provider).is_empty(),
                "no models for {}",
                provider.name()
            );
        }
    }
}
