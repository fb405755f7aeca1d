//! Configuration file management for mediascribe.
//!
//! This module handles loading and saving application configuration from
//! TOML files. Configuration is stored in the user's config directory.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::transform::RewriteStyle;

/// Audio capture configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Audio device to use. Options:
    /// - "default" for system default device
    /// - numeric index (0, 1, 2, etc.) from `mediascribe list-devices`
    /// - device name from `mediascribe list-devices`
    pub device: String,
    /// Requested recording sample rate in Hz (the device may override;
    /// 16000 is plenty for speech recognition)
    pub sample_rate: u32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            device: "default".to_string(),
            sample_rate: 16000,
        }
    }
}

/// Defaults for the rewrite transform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteConfig {
    /// Default target style when --style is not given
    #[serde(default = "default_style")]
    pub style: RewriteStyle,
    /// Default rewrite intensity in [0.0, 1.0]
    #[serde(default = "default_intensity")]
    pub intensity: f32,
}

fn default_style() -> RewriteStyle {
    RewriteStyle::Formal
}

fn default_intensity() -> f32 {
    0.5
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            style: default_style(),
            intensity: default_intensity(),
        }
    }
}

/// OpenAI API configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenAiConfig {
    // Currently no additional parameters beyond what's in the API calls.
    // Add here as OpenAI features become configurable.
}

/// Groq API configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroqConfig {}

/// Gemini API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// Cap on generated tokens per transform request
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

fn default_max_output_tokens() -> u32 {
    8192
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

/// All provider configurations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub openai: OpenAiConfig,
    #[serde(default)]
    pub groq: GroqConfig,
    #[serde(default)]
    pub gemini: GeminiConfig,
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediascribeConfig {
    #[serde(default)]
    pub audio: AudioConfig,
    #[serde(default)]
    pub rewrite: RewriteConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

impl MediascribeConfig {
    /// Loads configuration from the user's config directory, creating a
    /// default config file on first run.
    ///
    /// # Errors
    /// - If the config directory cannot be determined or created
    /// - If the config file cannot be read or written
    /// - If the TOML is malformed
    pub fn load_or_init() -> anyhow::Result<Self> {
        let config_path = get_config_path()?;

        if !config_path.exists() {
            let config = Self::default();
            config.save()?;
            tracing::info!("Created default config at {}", config_path.display());
            return Ok(config);
        }

        let config_content = fs::read_to_string(&config_path)?;
        let config: MediascribeConfig = toml::from_str(&config_content)
            .map_err(|e| anyhow::anyhow!("Malformed config at {}: {e}", config_path.display()))?;
        Ok(config)
    }

    /// Saves configuration to the user's config directory.
    ///
    /// # Errors
    /// - If the config directory cannot be determined or created
    /// - If the file cannot be written
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = get_config_path()?;
        let config_content = toml::to_string_pretty(self)?;
        fs::write(&config_path, config_content)?;
        tracing::info!("Configuration saved");
        Ok(())
    }
}

/// Retrieves the path to the config file, creating its directory if needed.
///
/// # Errors
/// - If the home directory cannot be determined
/// - If the config directory cannot be created
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = dirs::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not find home directory",
        )
    })?;
    let config_path = home
        .join(".config")
        .join("mediascribe")
        .join("mediascribe.toml");

    std::fs::create_dir_all(config_path.parent().unwrap())?;

    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MediascribeConfig::default();
        assert_eq!(config.audio.device, "default");
        assert_eq!(config.audio.sample_rate, 16000);
        assert_eq!(config.rewrite.style, RewriteStyle::Formal);
        assert!((config.rewrite.intensity - 0.5).abs() < f32::EPSILON);
        assert_eq!(config.providers.gemini.max_output_tokens, 8192);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: MediascribeConfig = toml::from_str("").unwrap();
        assert_eq!(config.audio.sample_rate, 16000);
    }

    #[test]
    fn test_partial_toml_round_trip() {
        let config: MediascribeConfig = toml::from_str(
            r#"
            [audio]
            device = "2"
            sample_rate = 48000

            [rewrite]
            style = "concise"
            "#,
        )
        .unwrap();

        assert_eq!(config.audio.device, "2");
        assert_eq!(config.audio.sample_rate, 48000);
        assert_eq!(config.rewrite.style, RewriteStyle::Concise);
        // intensity falls back to its default
        assert!((config.rewrite.intensity - 0.5).abs() < f32::EPSILON);

        let serialized = toml::to_string_pretty(&config).unwrap();
        let reparsed: MediascribeConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(reparsed.audio.device, "2");
        assert_eq!(reparsed.rewrite.style, RewriteStyle::Concise);
    }
}
