//! Application command handlers for mediascribe.
//!
//! This module organizes command handling into separate submodules, each
//! responsible for a specific application command.
//!
//! # Commands
//! - `auth`: Provider + model selection and API key management (unified flow)
//! - `record`: Microphone recording with transcription
//! - `transcribe`: Transcribe a media file (audio track extracted locally)
//! - `extract`: Extract a media file's audio track to WAV without uploading
//! - `correct`: Grammar/punctuation correction of text
//! - `rewrite`: Style rewriting of text at a tunable intensity
//! - `history`: List or show previous results
//! - `config`: Open configuration file in user's preferred editor
//! - `list_devices`: List available audio input devices
//! - `logs`: Display recent log entries

pub mod auth;
pub mod config;
pub mod correct;
pub mod extract;
pub mod history;
pub mod list_devices;
pub mod logs;
pub mod record;
pub mod rewrite;
mod shared;
pub mod transcribe;

pub use auth::handle_auth;
pub use config::handle_config;
pub use correct::handle_correct;
pub use extract::handle_extract;
pub use history::handle_history;
pub use list_devices::handle_list_devices;
pub use logs::handle_logs;
pub use record::handle_record;
pub use rewrite::handle_rewrite;
pub use transcribe::handle_transcribe;
