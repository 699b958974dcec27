//! Error types for TTS synthesis and playback.

use std::io;

/// Errors that can occur during TTS operations.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum TtsError {
    /// No API key was found in the process environment.
    #[error("No API key found for {provider} in the environment")]
    MissingApiKey {
        /// The provider that required the key.
        provider: String,
    },

    /// The HTTP request to the provider failed at the transport level.
    #[error("HTTP request to {provider} failed: {message}")]
    HttpError {
        /// The provider that was being contacted.
        provider: String,
        /// Description of the transport failure.
        message: String,
    },

    /// The provider responded with a non-success HTTP status.
    #[error("{provider} returned HTTP {status}: {message}")]
    ApiError {
        /// The provider that returned the error.
        provider: String,
        /// The HTTP status code.
        status: u16,
        /// The response body, if any.
        message: String,
    },

    /// The provider responded successfully but with no audio bytes.
    #[error("{provider} returned an empty audio response")]
    EmptyAudio {
        /// The provider that returned the empty response.
        provider: String,
    },

    /// Writing the audio file failed.
    #[error("Failed to write audio output")]
    Io {
        /// The underlying filesystem error.
        #[from]
        source: io::Error,
    },

    /// The audio player binary could not be found or launched.
    ///
    /// Never escapes [`crate::playback::play_file`], which converts playback
    /// failures into a printed fallback message.
    #[error("Failed to launch audio player {player}")]
    PlayerSpawnFailed {
        /// The player binary that failed to launch.
        player: String,
        /// The underlying spawn error.
        #[source]
        source: io::Error,
    },

    /// The audio player ran but exited with an error.
    ///
    /// Never escapes [`crate::playback::play_file`].
    #[error("Audio player {player} exited with an error: {stderr}")]
    PlaybackFailed {
        /// The player binary that failed.
        player: String,
        /// Captured stderr from the player process.
        stderr: String,
    },
}
