//! Clipboard utilities for mediascribe.
//!
//! Handles copying result text to the system clipboard using pbcopy (macOS),
//! wl-copy (Wayland), or xclip (X11).

use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

/// Copies text to the system clipboard.
///
/// Attempts pbcopy first on macOS, wl-copy for Wayland environments, then
/// falls back to xclip for X11. Does not fail if no clipboard is available,
/// allowing the operation itself to succeed regardless.
pub fn copy_to_clipboard(text: &str) -> anyhow::Result<()> {
    #[cfg(target_os = "macos")]
    {
        if try_copy("pbcopy", &[], text) {
            return Ok(());
        }
        tracing::debug!("pbcopy not found or not executable");
    }

    if try_copy("wl-copy", &["--type", "text/plain", "--trim-newline"], text) {
        return Ok(());
    }
    tracing::debug!("wl-copy not found or not executable");

    if try_copy("xclip", &["-selection", "clipboard", "-in", "-quiet"], text) {
        return Ok(());
    }
    tracing::debug!("xclip not found or not executable");

    #[cfg(target_os = "macos")]
    tracing::warn!("No clipboard tool available (pbcopy not found)");
    #[cfg(not(target_os = "macos"))]
    tracing::warn!("No clipboard tool available (wl-copy or xclip not found)");
    Ok(())
}

/// Pipes text into one clipboard tool. Returns true on success.
fn try_copy(tool: &str, args: &[&str], text: &str) -> bool {
    let Ok(mut child) = Command::new(tool).args(args).stdin(Stdio::piped()).spawn() else {
        return false;
    };

    let Some(mut stdin) = child.stdin.take() else {
        return false;
    };

    match write!(stdin, "{text}") {
        Ok(_) => {
            drop(stdin);
            // Give the tool a moment to take ownership of the selection
            thread::sleep(Duration::from_millis(100));
            tracing::debug!("Text copied to clipboard via {tool}");
            true
        }
        Err(e) => {
            tracing::warn!("Failed to write to {tool} stdin: {e}");
            false
        }
    }
}
