//! Style rewriting of text at a tunable intensity.
//!
//! Takes text from an argument, a file, or stdin, and rewrites it in the
//! requested style. Style and intensity default to the values in the config
//! file.

use crate::commands::shared;
use crate::config;
use crate::history::EntryKind;
use crate::transform::{self, RewriteStyle};
use std::path::PathBuf;

/// Handles the rewrite command.
///
/// # Arguments
/// * `text` - Text passed directly as an argument
/// * `file` - Optional file to read the text from
/// * `style` - Target style id; falls back to the configured default
/// * `intensity` - Rewrite intensity in [0.0, 1.0]; falls back to the
///   configured default
/// * `clipboard` - If true, copy result to clipboard instead of stdout
/// * `output_file` - Optional file path to write result to instead of stdout
pub async fn handle_rewrite(
    text: Option<String>,
    file: Option<PathBuf>,
    style: Option<String>,
    intensity: Option<f32>,
    clipboard: bool,
    output_file: Option<String>,
) -> Result<(), anyhow::Error> {
    tracing::info!("=== mediascribe Rewrite Command ===");

    let config_data = config::MediascribeConfig::load_or_init().map_err(|err| {
        tracing::error!("Failed to load configuration: {err}");
        anyhow::anyhow!("Configuration error: {err}")
    })?;

    let style = match style {
        Some(id) => RewriteStyle::from_id(&id).ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown style '{id}'. Available styles: {}",
                RewriteStyle::available_ids()
            )
        })?,
        None => config_data.rewrite.style,
    };

    let intensity = intensity.unwrap_or(config_data.rewrite.intensity);
    if !(0.0..=1.0).contains(&intensity) {
        return Err(anyhow::anyhow!(
            "Intensity must be between 0.0 and 1.0, got {intensity}"
        ));
    }

    let input = shared::read_text_input(text, file)?;
    let transform_config = shared::transform_config(&config_data)?;

    let rewritten = transform::rewrite(&transform_config, &input, style, intensity)
        .await
        .map_err(|e| {
            tracing::error!("Rewrite failed: {e}");
            anyhow::anyhow!("Rewrite failed: {e}")
        })?;

    shared::save_to_history(EntryKind::Rewrite, &rewritten);
    shared::emit_output(&rewritten, clipboard, output_file)?;

    Ok(())
}
