//! FFmpeg/ffprobe locator utilities.
//!
//! Provides cross-platform discovery of the ffmpeg binaries used for media
//! decoding. Checks standard installation locations before falling back to a
//! PATH search, so the tools are found even in environments with a limited
//! PATH setup (e.g., GUI-launched terminals).

use anyhow::{anyhow, Result};
use std::path::PathBuf;

/// Locates the ffmpeg binary on the system.
pub fn find_ffmpeg() -> Result<PathBuf> {
    find_tool("ffmpeg")
}

/// Locates the ffprobe binary on the system.
///
/// ffprobe ships alongside ffmpeg in every distribution we know of, so the
/// same search strategy applies.
pub fn find_ffprobe() -> Result<PathBuf> {
    find_tool("ffprobe")
}

/// Locates one of the ffmpeg-suite binaries.
///
/// Checks in this order:
/// 1. macOS homebrew locations: `/opt/homebrew/bin`, `/usr/local/bin`
/// 2. Linux standard locations: `/usr/bin`, `/usr/local/bin`, `/snap/bin`
/// 3. Windows standard locations: `C:\ffmpeg\bin` and Program Files
/// 4. Falls back to PATH search via `which` or `where`
fn find_tool(name: &str) -> Result<PathBuf> {
    let prefixes: Vec<PathBuf> = if cfg!(target_os = "macos") {
        vec![
            PathBuf::from("/opt/homebrew/bin"), // Apple Silicon Homebrew
            PathBuf::from("/usr/local/bin"),    // Intel Homebrew or manual install
            PathBuf::from("/usr/bin"),          // Direct system install
        ]
    } else if cfg!(target_os = "linux") {
        vec![
            PathBuf::from("/usr/bin"),       // Standard Linux
            PathBuf::from("/usr/local/bin"), // Manual install
            PathBuf::from("/snap/bin"),      // Snap installation
        ]
    } else if cfg!(target_os = "windows") {
        vec![
            PathBuf::from("C:\\ffmpeg\\bin"),
            PathBuf::from("C:\\Program Files\\ffmpeg\\bin"),
            PathBuf::from("C:\\Program Files (x86)\\ffmpeg\\bin"),
        ]
    } else {
        vec![] // For other platforms, rely on PATH search
    };

    let file_name = if cfg!(target_os = "windows") {
        format!("{name}.exe")
    } else {
        name.to_string()
    };

    for prefix in prefixes {
        let path = prefix.join(&file_name);
        if path.exists() {
            tracing::debug!("Found {} at: {}", name, path.display());
            return Ok(path);
        }
    }

    let path = find_in_path(name)?;
    tracing::debug!("Found {} in PATH at: {}", name, path.display());
    Ok(path)
}

/// Searches for a binary in the system PATH.
///
/// Uses `which` on Unix systems and `where` on Windows.
fn find_in_path(binary_name: &str) -> Result<PathBuf> {
    let search_cmd = if cfg!(target_os = "windows") {
        "where"
    } else {
        "which"
    };

    let output = std::process::Command::new(search_cmd)
        .arg(binary_name)
        .output()
        .map_err(|e| anyhow!("Failed to search PATH for {binary_name}: {e}"))?;

    if output.status.success() {
        let path_str = String::from_utf8_lossy(&output.stdout);
        let path = PathBuf::from(path_str.lines().next().unwrap_or("").trim());
        if !path.as_os_str().is_empty() {
            return Ok(path);
        }
    }

    Err(anyhow!(
        "{binary_name} not found. Please install ffmpeg:\n\
         macOS: brew install ffmpeg\n\
         Linux: apt install ffmpeg (Debian/Ubuntu) or dnf install ffmpeg (Fedora)\n\
         Windows: Download from https://ffmpeg.org/download.html"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_ffmpeg() {
        // This test will succeed if ffmpeg is installed
        match find_ffmpeg() {
            Ok(path) => println!("Found ffmpeg at: {}", path.display()),
            Err(e) => println!("ffmpeg not found (expected on CI): {e}"),
        }
    }
}
