//! Text transform operations.
//!
//! The two secondary workbench operations applied to transcripts (or any
//! text): grammar/punctuation correction, and style rewriting at a tunable
//! intensity. Both are delegated to the configured provider's chat model;
//! this module owns prompt construction and request routing.

pub mod api;
pub mod prompt;

use crate::config::file::ProvidersConfig;
use crate::transcription::Provider;
use serde::{Deserialize, Serialize};

/// Rewrite target styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewriteStyle {
    Formal,
    Casual,
    Academic,
    Creative,
    Concise,
}

impl RewriteStyle {
    pub fn id(&self) -> &'static str {
        match self {
            RewriteStyle::Formal => "formal",
            RewriteStyle::Casual => "casual",
            RewriteStyle::Academic => "academic",
            RewriteStyle::Creative => "creative",
            RewriteStyle::Concise => "concise",
        }
    }

    /// How the style is described to the model.
    pub fn describe(&self) -> &'static str {
        match self {
            RewriteStyle::Formal => "formal and professional, suitable for business communication",
            RewriteStyle::Casual => "casual and conversational, relaxed in tone",
            RewriteStyle::Academic => "academic and precise, with measured scholarly language",
            RewriteStyle::Creative => "vivid and engaging, with expressive language",
            RewriteStyle::Concise => "as concise as possible without losing meaning",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "formal" => Some(RewriteStyle::Formal),
            "casual" => Some(RewriteStyle::Casual),
            "academic" => Some(RewriteStyle::Academic),
            "creative" => Some(RewriteStyle::Creative),
            "concise" => Some(RewriteStyle::Concise),
            _ => None,
        }
    }

    pub fn all() -> &'static [Self] {
        &[
            RewriteStyle::Formal,
            RewriteStyle::Casual,
            RewriteStyle::Academic,
            RewriteStyle::Creative,
            RewriteStyle::Concise,
        ]
    }

    /// Comma-separated list of valid ids, for CLI error messages.
    pub fn available_ids() -> String {
        Self::all()
            .iter()
            .map(|s| s.id())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for RewriteStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Configuration for text transform requests
#[derive(Debug, Clone)]
pub struct TransformConfig {
    /// Provider whose chat model runs the transform
    pub provider: Provider,
    /// The API key for authentication
    pub api_key: String,
    /// Provider-specific configurations
    pub providers: ProvidersConfig,
}

impl TransformConfig {
    pub fn new(provider: Provider, api_key: String, providers: ProvidersConfig) -> Self {
        Self {
            provider,
            api_key,
            providers,
        }
    }
}

/// Corrects grammar, spelling, and punctuation while preserving wording and
/// meaning.
pub async fn correct(config: &TransformConfig, text: &str) -> anyhow::Result<String> {
    tracing::info!(
        "Correcting {} characters with {} ({})",
        text.len(),
        config.provider.name(),
        config.provider.chat_model()
    );

    let request = prompt::correction_prompt(text);
    api::complete(config, request).await
}

/// Rewrites text in the given style. Intensity is clamped to [0.0, 1.0]:
/// near 0.0 only nudges word choices, near 1.0 allows a complete rewrite.
pub async fn rewrite(
    config: &TransformConfig,
    text: &str,
    style: RewriteStyle,
    intensity: f32,
) -> anyhow::Result<String> {
    let intensity = intensity.clamp(0.0, 1.0);
    tracing::info!(
        "Rewriting {} characters as '{}' at intensity {:.2} with {}",
        text.len(),
        style.id(),
        intensity,
        config.provider.name()
    );

    let request = prompt::rewrite_prompt(text, style, intensity);
    api::complete(config, request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_id_round_trip() {
        for style in RewriteStyle::all() {
            assert_eq!(RewriteStyle::from_id(style.id()).as_ref(), Some(style));
        }
        assert_eq!(RewriteStyle::from_id("baroque"), None);
    }

    #[test]
    fn test_available_ids_lists_all() {
        let ids = RewriteStyle::available_ids();
        for style in RewriteStyle::all() {
            assert!(ids.contains(style.id()));
        }
    }
}
