//! Helpers shared across command handlers.
//!
//! Covers the plumbing every command repeats: resolving the configured
//! model and API key, sourcing input text, routing result text to
//! stdout/clipboard/file, and recording results in history.

use crate::clipboard::copy_to_clipboard;
use crate::config;
use crate::history::{EntryKind, HistoryManager};
use crate::transcription::{Provider, TranscriptionConfig, TranscriptionModel};
use crate::transform::TransformConfig;
use std::io::Read;
use std::path::PathBuf;

/// Resolves the selected transcription model and its API key into a request
/// config.
///
/// # Errors
/// - If no model has been selected yet
/// - If no API key is stored for the model's provider
pub fn transcription_config(
    config_data: &config::MediascribeConfig,
) -> anyhow::Result<TranscriptionConfig> {
    let model_id = config::get_selected_model()?.ok_or_else(|| {
        anyhow::anyhow!("No model selected. Please run 'mediascribe auth' to select a model")
    })?;

    let model = TranscriptionModel::from_id(&model_id)
        .ok_or_else(|| anyhow::anyhow!("Unknown model: {model_id}"))?;
    let provider = model.provider();

    let api_key = api_key_for(&provider)?;

    Ok(TranscriptionConfig::new(
        model,
        api_key,
        config_data.providers.clone(),
    ))
}

/// Resolves the selected model's provider and API key into a transform
/// config. Transforms run on the same provider the user authenticated for
/// transcription.
pub fn transform_config(
    config_data: &config::MediascribeConfig,
) -> anyhow::Result<TransformConfig> {
    let model_id = config::get_selected_model()?.ok_or_else(|| {
        anyhow::anyhow!("No model selected. Please run 'mediascribe auth' to select a model")
    })?;

    let model = TranscriptionModel::from_id(&model_id)
        .ok_or_else(|| anyhow::anyhow!("Unknown model: {model_id}"))?;
    let provider = model.provider();

    let api_key = api_key_for(&provider)?;

    Ok(TransformConfig::new(
        provider,
        api_key,
        config_data.providers.clone(),
    ))
}

fn api_key_for(provider: &Provider) -> anyhow::Result<String> {
    config::get_api_key(provider.id())?.ok_or_else(|| {
        anyhow::anyhow!(
            "No API key for {}. Please run 'mediascribe auth'",
            provider.name()
        )
    })
}

/// Sources input text for the transform commands: positional argument,
/// `--file`, or piped stdin, in that order of precedence.
///
/// # Errors
/// - If the file cannot be read
/// - If no source yields any text
pub fn read_text_input(text: Option<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Failed to read '{}': {e}", path.display()));
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {e}"))?;

    if buffer.trim().is_empty() {
        return Err(anyhow::anyhow!(
            "No input text. Pass text as an argument, use --file, or pipe via stdin."
        ));
    }

    Ok(buffer)
}

/// Routes result text to its destination: file > clipboard > stdout.
pub fn emit_output(
    text: &str,
    clipboard: bool,
    output_file: Option<String>,
) -> anyhow::Result<()> {
    if let Some(file_path) = output_file {
        std::fs::write(&file_path, text)
            .map_err(|e| anyhow::anyhow!("Failed to write to file '{file_path}': {e}"))?;
        tracing::debug!("Result written to file: {file_path}");
    } else if clipboard {
        if let Err(e) = copy_to_clipboard(text) {
            tracing::warn!("Failed to copy to clipboard: {e}");
        } else {
            tracing::debug!("Result copied to clipboard");
        }
    } else {
        // Default: stdout
        println!("{text}");
        tracing::debug!("Result printed to stdout");
    }

    Ok(())
}

/// Saves a result to history, logging rather than failing on error so the
/// primary operation still succeeds.
pub fn save_to_history(kind: EntryKind, text: &str) {
    let result = data_dir().and_then(|dir| {
        let mut manager = HistoryManager::new(&dir)?;
        manager.save_entry(kind, text)
    });

    if let Err(e) = result {
        tracing::warn!("Failed to save {} to history: {}", kind.id(), e);
    }
}

/// The application data directory, created on demand.
pub fn data_dir() -> anyhow::Result<PathBuf> {
    let dir = dirs::home_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?
        .join(".local")
        .join("share")
        .join("mediascribe");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
