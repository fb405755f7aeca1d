//! Grammar and punctuation correction of text.
//!
//! Takes text from an argument, a file, or stdin and returns the corrected
//! version via the configured provider's chat model.

use crate::commands::shared;
use crate::config;
use crate::history::EntryKind;
use crate::transform;
use std::path::PathBuf;

/// Handles the correct command.
///
/// # Arguments
/// * `text` - Text passed directly as an argument
/// * `file` - Optional file to read the text from
/// * `clipboard` - If true, copy result to clipboard instead of stdout
/// * `output_file` - Optional file path to write result to instead of stdout
pub async fn handle_correct(
    text: Option<String>,
    file: Option<PathBuf>,
    clipboard: bool,
    output_file: Option<String>,
) -> Result<(), anyhow::Error> {
    tracing::info!("=== mediascribe Correct Command ===");

    let config_data = config::MediascribeConfig::load_or_init().map_err(|err| {
        tracing::error!("Failed to load configuration: {err}");
        anyhow::anyhow!("Configuration error: {err}")
    })?;

    let input = shared::read_text_input(text, file)?;
    let transform_config = shared::transform_config(&config_data)?;

    let corrected = transform::correct(&transform_config, &input)
        .await
        .map_err(|e| {
            tracing::error!("Correction failed: {e}");
            anyhow::anyhow!("Correction failed: {e}")
        })?;

    shared::save_to_history(EntryKind::Correction, &corrected);
    shared::emit_output(&corrected, clipboard, output_file)?;

    Ok(())
}
