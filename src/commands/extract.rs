//! Extract a media file's audio track to WAV.
//!
//! Purely local: decodes via ffmpeg, re-encodes with the canonical WAV
//! encoder, writes the result to disk. Nothing is uploaded.

use crate::audio::{decode_media, encode_wav};
use std::path::PathBuf;

/// Handles audio extraction from a media file.
///
/// # Arguments
/// * `file` - Path to the media file
/// * `output` - Destination WAV path; defaults to the input path with a
///   `.wav` extension
pub fn handle_extract(file: PathBuf, output: Option<PathBuf>) -> Result<(), anyhow::Error> {
    tracing::info!("=== mediascribe Extract Command ===");

    if !file.exists() {
        return Err(anyhow::anyhow!("Media file not found: {}", file.display()));
    }

    let output_path = output.unwrap_or_else(|| file.with_extension("wav"));
    if output_path == file {
        return Err(anyhow::anyhow!(
            "Input is already a WAV file: {}",
            file.display()
        ));
    }

    let buffer = decode_media(&file)?;
    let blob = encode_wav(&buffer);

    std::fs::write(&output_path, blob.bytes())
        .map_err(|e| anyhow::anyhow!("Failed to write '{}': {e}", output_path.display()))?;

    tracing::info!(
        "Audio extracted: {} ({} bytes, {:.2}s, {}Hz, {} channels)",
        output_path.display(),
        blob.len(),
        buffer.duration_secs(),
        buffer.sample_rate,
        buffer.channel_count()
    );
    println!("{}", output_path.display());

    Ok(())
}
