//! Transcription service for audio-to-text conversion.
//!
//! This module provides support for multiple transcription providers and
//! models through a unified interface. Each provider has its own API
//! endpoint, upload shape, and authentication method.

pub mod api;
pub mod model;
pub mod provider;

pub use api::{transcribe, TranscriptionConfig};
pub use model::TranscriptionModel;
pub use provider::Provider;
