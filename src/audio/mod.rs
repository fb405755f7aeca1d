//! Audio pipeline for mediascribe.
//!
//! Covers the full local path from encoded media to upload-ready bytes:
//! decoding arbitrary containers via ffmpeg, the in-memory multi-channel
//! float buffer, and the canonical 16-bit PCM WAV encoder.

pub mod buffer;
pub mod decode;
pub mod ffmpeg;
pub mod wav;

pub use buffer::AudioBuffer;
pub use decode::{decode_media, DecodeError};
pub use ffmpeg::{find_ffmpeg, find_ffprobe};
pub use wav::{encode_wav, WavBlob, WAV_MIME};
