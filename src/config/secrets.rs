//! Credential storage for mediascribe.
//!
//! API keys and the selected model live in a separate TOML file under the
//! user's local data directory, never in the editable config file. The file
//! is created with owner-only permissions on Unix.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// On-disk shape of the secrets file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Secrets {
    /// Id of the currently selected transcription model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    selected_model: Option<String>,
    /// Provider id -> API key
    #[serde(default)]
    api_keys: BTreeMap<String, String>,
}

/// Returns the stored API key for a provider, if any.
pub fn get_api_key(provider_id: &str) -> anyhow::Result<Option<String>> {
    let secrets = load_secrets()?;
    Ok(secrets.api_keys.get(provider_id).cloned())
}

/// Saves an API key for a provider, replacing any existing key.
pub fn save_api_key(provider_id: &str, api_key: &str) -> anyhow::Result<()> {
    let mut secrets = load_secrets()?;
    secrets
        .api_keys
        .insert(provider_id.to_string(), api_key.to_string());
    store_secrets(&secrets)?;
    tracing::info!("API key saved for provider '{}'", provider_id);
    Ok(())
}

/// Returns the id of the currently selected transcription model, if any.
pub fn get_selected_model() -> anyhow::Result<Option<String>> {
    let secrets = load_secrets()?;
    Ok(secrets.selected_model)
}

/// Persists the selected transcription model id.
pub fn save_selected_model(model_id: &str) -> anyhow::Result<()> {
    let mut secrets = load_secrets()?;
    secrets.selected_model = Some(model_id.to_string());
    store_secrets(&secrets)?;
    tracing::info!("Selected model saved: {}", model_id);
    Ok(())
}

fn load_secrets() -> anyhow::Result<Secrets> {
    let path = secrets_path()?;
    if !path.exists() {
        return Ok(Secrets::default());
    }

    let content = fs::read_to_string(&path)?;
    let secrets: Secrets = toml::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Malformed secrets file at {}: {e}", path.display()))?;
    Ok(secrets)
}

fn store_secrets(secrets: &Secrets) -> anyhow::Result<()> {
    let path = secrets_path()?;
    let content = toml::to_string_pretty(secrets)?;
    fs::write(&path, content)?;
    restrict_permissions(&path)?;
    Ok(())
}

/// Path to the secrets file, creating the data directory if needed.
fn secrets_path() -> anyhow::Result<PathBuf> {
    let data_dir = dirs::home_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?
        .join(".local")
        .join("share")
        .join("mediascribe");

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir.join("secrets.toml"))
}

/// Owner read/write only. Credentials must not be world-readable.
#[cfg(unix)]
fn restrict_permissions(path: &std::path::Path) -> anyhow::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o600);
    fs::set_permissions(path, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &std::path::Path) -> anyhow::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secrets_toml_round_trip() {
        let mut secrets = Secrets::default();
        secrets
            .api_keys
            .insert("openai".to_string(), "sk-test".to_string());
        secrets.selected_model = Some("whisper".to_string());

        let serialized = toml::to_string_pretty(&secrets).unwrap();
        let parsed: Secrets = toml::from_str(&serialized).unwrap();

        assert_eq!(parsed.api_keys.get("openai").map(String::as_str), Some("sk-test"));
        assert_eq!(parsed.selected_model.as_deref(), Some("whisper"));
    }

    #[test]
    fn test_empty_secrets_file_parses() {
        let parsed: Secrets = toml::from_str("").unwrap();
        assert!(parsed.api_keys.is_empty());
        assert!(parsed.selected_model.is_none());
    }
}
