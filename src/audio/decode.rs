//! Media decoding via the ffmpeg suite.
//!
//! Decodes any container/codec ffmpeg understands (video included) into an
//! in-memory [`AudioBuffer`] at the stream's native sample rate and channel
//! layout. The first audio stream is probed with ffprobe, then ffmpeg writes
//! raw interleaved f32 PCM to stdout, which we parse directly. Nothing is
//! written to disk.

use super::buffer::AudioBuffer;
use super::ffmpeg::{find_ffmpeg, find_ffprobe};
use std::fmt;
use std::path::Path;
use std::process::Command;

/// Why a media file could not be turned into an audio buffer.
#[derive(Debug)]
pub enum DecodeError {
    /// ffmpeg/ffprobe is not installed or not discoverable
    ToolMissing(String),
    /// The file has no audio stream to extract
    NoAudioTrack(String),
    /// The container is corrupt or the codec is unsupported
    Failed(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::ToolMissing(msg) => {
                write!(f, "Media decoding unavailable: {msg}")
            }
            DecodeError::NoAudioTrack(file) => {
                write!(f, "No audio track found in '{file}'")
            }
            DecodeError::Failed(msg) => {
                write!(f, "Failed to decode media: {msg}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Audio stream parameters reported by ffprobe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StreamInfo {
    sample_rate: u32,
    channel_count: usize,
}

/// Decodes the first audio stream of a media file into an [`AudioBuffer`].
///
/// # Errors
/// - [`DecodeError::ToolMissing`] if ffmpeg or ffprobe cannot be found
/// - [`DecodeError::NoAudioTrack`] if the file has no audio stream
/// - [`DecodeError::Failed`] if the file is corrupt or the codec unsupported
pub fn decode_media(path: &Path) -> Result<AudioBuffer, DecodeError> {
    let info = probe(path)?;
    tracing::debug!(
        "Probed '{}': {}Hz, {} channels",
        path.display(),
        info.sample_rate,
        info.channel_count
    );

    let ffmpeg = find_ffmpeg().map_err(|e| DecodeError::ToolMissing(e.to_string()))?;

    // Decode to raw interleaved f32 on stdout, video streams dropped
    let output = Command::new(&ffmpeg)
        .arg("-loglevel")
        .arg("error")
        .arg("-i")
        .arg(path)
        .arg("-vn")
        .arg("-map")
        .arg("a:0")
        .arg("-f")
        .arg("f32le")
        .arg("-acodec")
        .arg("pcm_f32le")
        .arg("-")
        .output()
        .map_err(|e| DecodeError::Failed(format!("failed to run ffmpeg: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        tracing::error!("ffmpeg decode failed for '{}': {}", path.display(), stderr);
        return Err(DecodeError::Failed(stderr.trim().to_string()));
    }

    let samples = parse_f32le(&output.stdout);
    let buffer = AudioBuffer::from_interleaved(info.sample_rate, info.channel_count, &samples);

    tracing::info!(
        "Decoded '{}': {:.2}s, {}Hz, {} channels",
        path.display(),
        buffer.duration_secs(),
        buffer.sample_rate,
        buffer.channel_count()
    );

    Ok(buffer)
}

/// Probes the first audio stream of a media file.
fn probe(path: &Path) -> Result<StreamInfo, DecodeError> {
    let ffprobe = find_ffprobe().map_err(|e| DecodeError::ToolMissing(e.to_string()))?;

    let output = Command::new(&ffprobe)
        .arg("-v")
        .arg("error")
        .arg("-select_streams")
        .arg("a:0")
        .arg("-show_entries")
        .arg("stream=sample_rate,channels")
        .arg("-of")
        .arg("csv=p=0")
        .arg(path)
        .output()
        .map_err(|e| DecodeError::Failed(format!("failed to run ffprobe: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(DecodeError::Failed(stderr.trim().to_string()));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_probe_output(&stdout)
        .ok_or_else(|| DecodeError::NoAudioTrack(path.display().to_string()))
}

/// Parses ffprobe CSV output of the form "44100,2".
fn parse_probe_output(output: &str) -> Option<StreamInfo> {
    let line = output.lines().find(|l| !l.trim().is_empty())?;
    let mut fields = line.trim().split(',');

    let sample_rate: u32 = fields.next()?.trim().parse().ok()?;
    let channel_count: usize = fields.next()?.trim().parse().ok()?;

    if sample_rate == 0 || channel_count == 0 {
        return None;
    }

    Some(StreamInfo {
        sample_rate,
        channel_count,
    })
}

/// Reinterprets raw little-endian f32 bytes as samples. Trailing bytes that
/// do not form a whole float are discarded.
fn parse_f32le(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(4)
        .map(|chunk| f32::from_le_bytes(chunk.try_into().unwrap()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_probe_output() {
        let info = parse_probe_output("44100,2\n").unwrap();
        assert_eq!(info.sample_rate, 44100);
        assert_eq!(info.channel_count, 2);
    }

    #[test]
    fn test_parse_probe_output_empty_means_no_audio() {
        assert!(parse_probe_output("").is_none());
        assert!(parse_probe_output("\n").is_none());
    }

    #[test]
    fn test_parse_probe_output_rejects_zero_fields() {
        assert!(parse_probe_output("0,2").is_none());
        assert!(parse_probe_output("44100,0").is_none());
        assert!(parse_probe_output("garbage").is_none());
    }

    #[test]
    fn test_parse_f32le() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0.5f32.to_le_bytes());
        bytes.extend_from_slice(&(-0.25f32).to_le_bytes());
        bytes.push(0xFF); // trailing partial float

        assert_eq!(parse_f32le(&bytes), vec![0.5, -0.25]);
    }
}
