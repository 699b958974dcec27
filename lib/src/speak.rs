//! High-level synthesize, save, and play operations.
//!
//! The convenience wrappers reproduce the fixed settings of the original
//! call-through functions: English at normal speed for gTTS, the default
//! Aria voice for ElevenLabs, MP3 output at a caller-supplied path.

use std::path::Path;

use crate::errors::TtsError;
use crate::playback;
use crate::providers::{ElevenLabsProvider, GttsProvider};
use crate::traits::TtsSynthesizer;
use crate::types::TtsConfig;

/// Synthesize `text` and save the MP3 to `path`, without playback.
///
/// ## Errors
///
/// Synthesis and file-write errors propagate to the caller.
pub async fn save_speech(
    provider: &impl TtsSynthesizer,
    text: &str,
    config: &TtsConfig,
    path: &Path,
) -> Result<(), TtsError> {
    provider.synthesize_to_file(text, config, path).await
}

/// Synthesize `text`, save the MP3 to `path`, then play it through the
/// host's default audio player.
///
/// The player is invoked exactly once, after the file has been written.
///
/// ## Errors
///
/// Synthesis and file-write errors propagate. The playback step never
/// fails: see [`playback::play_file`].
pub async fn speak(
    provider: &impl TtsSynthesizer,
    text: &str,
    config: &TtsConfig,
    path: &Path,
) -> Result<(), TtsError> {
    provider.synthesize_to_file(text, config, path).await?;
    playback::play_file(path).await;
    Ok(())
}

/// Save English speech via the free Google endpoint ("en", normal speed).
///
/// ## Errors
///
/// Returns `TtsError` if the network call fails.
pub async fn save_with_gtts(text: &str, path: &Path) -> Result<(), TtsError> {
    save_speech(&GttsProvider::new(), text, &TtsConfig::default(), path).await
}

/// Save speech via the ElevenLabs API with its default voice and model.
///
/// ## Errors
///
/// Returns `TtsError::MissingApiKey` if no API key is in the environment
/// (before any file is written), or a network/API error on failure.
pub async fn save_with_elevenlabs(text: &str, path: &Path) -> Result<(), TtsError> {
    let provider = ElevenLabsProvider::new()?;
    save_speech(&provider, text, &TtsConfig::default(), path).await
}

/// [`save_with_gtts`], then play the file through the default player.
///
/// ## Errors
///
/// Same as [`save_with_gtts`]; the playback step never fails.
pub async fn speak_with_gtts(text: &str, path: &Path) -> Result<(), TtsError> {
    speak(&GttsProvider::new(), text, &TtsConfig::default(), path).await
}

/// [`save_with_elevenlabs`], then play the file through the default player.
///
/// ## Errors
///
/// Same as [`save_with_elevenlabs`]; the playback step never fails.
pub async fn speak_with_elevenlabs(text: &str, path: &Path) -> Result<(), TtsError> {
    let provider = ElevenLabsProvider::new()?;
    speak(&provider, text, &TtsConfig::default(), path).await
}

// ============================================================================
// Tests
// ============================================================================
