//! Transcribe a media file.
//!
//! Accepts any audio or video file ffmpeg can read. The audio track is
//! extracted and re-encoded to WAV locally, so only compact uncompressed
//! audio is uploaded to the provider, never a full video payload. Files that
//! are already WAV are uploaded as-is.

use crate::audio::{decode_media, encode_wav};
use crate::commands::shared;
use crate::config;
use crate::history::EntryKind;
use crate::transcription;
use std::path::{Path, PathBuf};

/// Handles transcription of a media file.
///
/// # Arguments
/// * `file` - Path to the media file to transcribe
/// * `clipboard` - If true, copy result to clipboard instead of stdout
/// * `output_file` - Optional file path to write result to instead of stdout
pub async fn handle_transcribe(
    file: PathBuf,
    clipboard: bool,
    output_file: Option<String>,
) -> Result<(), anyhow::Error> {
    tracing::info!("=== mediascribe Transcribe Command ===");

    if !file.exists() {
        return Err(anyhow::anyhow!("Media file not found: {}", file.display()));
    }

    tracing::info!("Transcribing file: {}", file.display());

    let config_data = config::MediascribeConfig::load_or_init().map_err(|err| {
        tracing::error!("Failed to load configuration: {err}");
        anyhow::anyhow!("Configuration error: {err}")
    })?;

    let transcription_config = shared::transcription_config(&config_data)?;

    let (wav_bytes, upload_name) = prepare_upload(&file)?;

    tracing::debug!("Starting transcription...");
    let text = transcription::transcribe(&transcription_config, wav_bytes, &upload_name)
        .await
        .map_err(|e| {
            tracing::error!("Transcription failed: {e}");
            anyhow::anyhow!("Transcription failed: {e}")
        })?;

    tracing::debug!("Transcription completed: {} characters", text.len());

    shared::save_to_history(EntryKind::Transcript, &text);
    shared::emit_output(&text, clipboard, output_file)?;

    Ok(())
}

/// Produces the WAV bytes to upload for a media file.
///
/// WAV input is read directly; everything else goes through the local
/// decode + re-encode pipeline.
fn prepare_upload(file: &Path) -> anyhow::Result<(Vec<u8>, String)> {
    let is_wav = file
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("wav"));

    if is_wav {
        let bytes = std::fs::read(file)
            .map_err(|e| anyhow::anyhow!("Failed to read audio file: {e}"))?;
        let name = file
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        return Ok((bytes, name));
    }

    tracing::info!("Extracting audio track from '{}'", file.display());
    let buffer = decode_media(file)?;
    let blob = encode_wav(&buffer);
    tracing::debug!(
        "Extracted {:.2}s of audio ({} WAV bytes)",
        buffer.duration_secs(),
        blob.len()
    );

    let name = format!(
        "{}.wav",
        file.file_stem().unwrap_or_default().to_string_lossy()
    );
    Ok((blob.into_bytes(), name))
}
