//! Microphone recording and transcription.
//!
//! Records from the configured input device until Enter is pressed, encodes
//! the capture as WAV, and sends it for transcription.

use crate::audio::encode_wav;
use crate::commands::shared;
use crate::config;
use crate::history::EntryKind;
use crate::recording::AudioRecorder;
use crate::transcription;
use std::path::PathBuf;

/// Handles microphone recording and transcription.
///
/// # Arguments
/// * `clipboard` - If true, copy result to clipboard instead of stdout
/// * `output_file` - Optional file path to write result to instead of stdout
/// * `save_audio` - Optional path to also keep the recorded WAV
pub async fn handle_record(
    clipboard: bool,
    output_file: Option<String>,
    save_audio: Option<PathBuf>,
) -> Result<(), anyhow::Error> {
    tracing::info!("=== mediascribe Record Command ===");

    let config_data = config::MediascribeConfig::load_or_init().map_err(|err| {
        tracing::error!("Failed to load configuration: {err}");
        anyhow::anyhow!("Configuration error: {err}")
    })?;

    tracing::info!(
        "Configuration loaded: device={}, sample_rate={}Hz",
        config_data.audio.device,
        config_data.audio.sample_rate
    );

    // Resolve credentials before capturing so a missing key fails fast
    let transcription_config = shared::transcription_config(&config_data)?;

    let mut recorder = AudioRecorder::new(
        config_data.audio.sample_rate,
        config_data.audio.device.clone(),
    );

    recorder.start_recording().map_err(|e| {
        tracing::error!("Failed to start recording: {}", e);
        anyhow::anyhow!("Recording error: {e}. Check your audio configuration and try again.")
    })?;

    eprintln!("Recording at {}Hz. Press Enter to stop and transcribe...", recorder.sample_rate());

    // Block on stdin; Ctrl-C aborts the process before we upload anything
    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .map_err(|e| anyhow::anyhow!("Failed to read from stdin: {e}"))?;

    let buffer = recorder.stop_recording();

    if buffer.frame_count() == 0 {
        return Err(anyhow::anyhow!("No audio captured. Check your input device."));
    }

    let blob = encode_wav(&buffer);
    tracing::debug!(
        "Encoded recording: {:.2}s -> {} WAV bytes",
        buffer.duration_secs(),
        blob.len()
    );

    if let Some(path) = &save_audio {
        std::fs::write(path, blob.bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write '{}': {e}", path.display()))?;
        tracing::info!("Recording saved: {}", path.display());
    }

    eprintln!("Transcribing...");
    let text = transcription::transcribe(&transcription_config, blob.into_bytes(), "recording.wav")
        .await
        .map_err(|e| {
            tracing::error!("Transcription failed: {e}");
            anyhow::anyhow!("Transcription failed: {e}")
        })?;

    shared::save_to_history(EntryKind::Transcript, &text);
    shared::emit_output(&text, clipboard, output_file)?;

    Ok(())
}
