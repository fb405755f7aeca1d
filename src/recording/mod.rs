//! Microphone capture for mediascribe.
//!
//! Captures PCM samples from an input device into memory, in the float
//! format the WAV encoder consumes.

pub mod capture;

pub use capture::AudioRecorder;
