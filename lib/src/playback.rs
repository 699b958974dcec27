//! Playback through the host's default audio application.
//!
//! One launch command per supported platform (afplay on macOS, `start` on
//! Windows, xdg-open on Linux). This module is the only error-containment
//! point in the crate: playback failures are printed, never propagated.

use std::io;
use std::path::Path;

use crate::errors::TtsError;

/// Launch command for a platform, keyed by `std::env::consts::OS` names.
///
/// Returns the program and the arguments that precede the file path, or
/// `None` when the platform has no known default-player command.
fn player_command(os: &str) -> Option<(&'static str, &'static [&'static str])> {
    match os {
        "macos" => Some(("afplay", &[])),
        // `start` is a cmd built-in; the empty string fills its
        // window-title slot so the path is not mistaken for a title
        "windows" => Some(("cmd", &["/C", "start", ""])),
        "linux" => Some(("xdg-open", &[])),
        _ => None,
    }
}

/// Run the player command, waiting for it to exit.
async fn run_player(player: &str, pre_args: &[&str], path: &Path) -> Result<(), TtsError> {
    let binary = which::which(player).map_err(|_| TtsError::PlayerSpawnFailed {
        player: player.into(),
        source: io::Error::new(io::ErrorKind::NotFound, "player binary not found"),
    })?;

    tracing::debug!(
        player,
        path = %path.display(),
        "Launching audio player"
    );

    let output = tokio::process::Command::new(binary)
        .args(pre_args)
        .arg(path)
        .output()
        .await
        .map_err(|e| TtsError::PlayerSpawnFailed {
            player: player.into(),
            source: e,
        })?;

    if !output.status.success() {
        return Err(TtsError::PlaybackFailed {
            player: player.into(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    Ok(())
}

/// Print the manual-playback fallback message.
fn print_fallback(path: &Path) {
    println!("Audio file saved: {}", path.display());
    println!("Please play it manually using any media player.");
}

/// Play an audio file through the host's default audio application.
///
/// Detects the platform and launches the appropriate command with the file
/// path as its argument. On an unsupported platform, or when the player is
/// missing, fails to launch, or exits with an error, a fallback message is
/// printed instead. This function never returns an error and never panics.
///
/// ## Examples
///
/// ```ignore
/// use std::path::Path;
/// use outloud::playback::play_file;
///
/// play_file(Path::new("speech.mp3")).await;
/// ```
pub async fn play_file(path: &Path) {
    play_file_on(std::env::consts::OS, path).await
}

/// Platform-parameterized body of [`play_file`].
async fn play_file_on(os: &str, path: &Path) {
    let Some((player, pre_args)) = player_command(os) else {
        tracing::warn!(os, "No default audio player known for this platform");
        print_fallback(path);
        return;
    };

    if let Err(error) = run_player(player, pre_args, path).await {
        tracing::warn!(player, error = %error, "Audio playback failed");
        print_fallback(path);
    }
}

// ============================================================================
// Tests
// ============================================================================
