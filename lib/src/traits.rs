//! Traits for the outloud TTS abstraction layer.
//!
//! This module defines the core trait that all TTS providers implement.

use std::path::Path;

use crate::errors::TtsError;
use crate::types::TtsConfig;

/// Synthesizer trait for TTS providers.
///
/// Both providers (gTTS and ElevenLabs) implement this trait to provide a
/// unified interface for speech synthesis.
///
/// ## Native Async Traits
///
/// This trait uses native Rust async functions in traits (AFIT), available
/// since Rust 1.75. No `async-trait` crate is needed.
///
/// ## Implementation Requirements
///
/// Implementations must be `Send + Sync` to allow concurrent usage across
/// tasks and threads.
///
/// ## Examples
///
/// ```ignore
/// use outloud::{TtsSynthesizer, TtsConfig, TtsError};
///
/// struct MyProvider;
///
/// impl TtsSynthesizer for MyProvider {
///     fn name(&self) -> &'static str {
///         "my-provider"
///     }
///
///     async fn synthesize(&self, text: &str, config: &TtsConfig) -> Result<Vec<u8>, TtsError> {
///         // Generate MP3 bytes for the text
///         Ok(Vec::new())
///     }
/// }
/// ```
pub trait TtsSynthesizer: Send + Sync {
    /// Short provider name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Synthesize speech for `text`, returning MP3 audio bytes.
    ///
    /// ## Errors
    ///
    /// Returns `TtsError` if the network request fails, the provider
    /// rejects the request, or the response carries no audio.
    fn synthesize(
        &self,
        text: &str,
        config: &TtsConfig,
    ) -> impl std::future::Future<Output = Result<Vec<u8>, TtsError>> + Send;

    /// Synthesize speech and write it to `path`, overwriting any existing
    /// file.
    ///
    /// ## Errors
    ///
    /// Returns `TtsError` if synthesis fails or the file cannot be written.
    /// Nothing is written when synthesis fails.
    fn synthesize_to_file(
        &self,
        text: &str,
        config: &TtsConfig,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<(), TtsError>> + Send {
        async move {
            let audio = self.synthesize(text, config).await?;
            tokio::fs::write(path, &audio).await?;

            tracing::debug!(
                provider = self.name(),
                path = %path.display(),
                bytes = audio.len(),
                "Saved synthesized audio"
            );
            Ok(())
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
