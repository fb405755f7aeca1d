//! mediascribe: terminal media workbench.
//!
//! Extract audio from any media file, transcribe it with cloud AI, and
//! polish the text with grammar correction or style rewriting.

mod app;
mod audio;
mod clipboard;
mod commands;
mod config;
mod history;
mod logging;
mod recording;
mod transcription;
mod transform;

#[tokio::main]
async fn main() {
    if let Err(e) = app::run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
