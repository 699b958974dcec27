//! gTTS (Google Text-to-Speech) provider.
//!
//! Talks to the Google Translate speech endpoint directly over HTTP. Free,
//! no API key, requires network connectivity. Output is always MP3.

use reqwest::Client;
use tracing::debug;

use crate::errors::TtsError;
use crate::traits::TtsSynthesizer;
use crate::types::TtsConfig;

/// Default base URL for the Google Translate speech endpoint.
const DEFAULT_BASE_URL: &str = "https://translate.google.com";

/// `ttsspeed` value for normal speech rate.
const SPEED_NORMAL: &str = "1";

/// `ttsspeed` value for slow speech rate (the rate gTTS uses for `slow`).
const SPEED_SLOW: &str = "0.24";

/// gTTS (Google Text-to-Speech) provider.
///
/// Synthesizes speech via the unauthenticated `translate_tts` endpoint of
/// Google Translate, the same engine the `gTTS` Python package uses.
///
/// ## Voice Selection
///
/// The language code selects the voice (e.g., "en", "fr", "de"). gTTS does
/// not distinguish between male and female voices.
///
/// ## Examples
///
/// ```ignore
/// use outloud::providers::GttsProvider;
/// use outloud::{TtsSynthesizer, TtsConfig};
///
/// let provider = GttsProvider::new();
/// let audio = provider.synthesize("Hello, world!", &TtsConfig::default()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct GttsProvider {
    client: Client,
    base_url: String,
}

impl Default for GttsProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GttsProvider {
    /// Provider name constant for logs and error messages.
    const PROVIDER_NAME: &'static str = "gtts";

    /// Create a new gTTS provider against the real Google endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a provider pointed at a custom base URL.
    ///
    /// Useful for testing with mock servers.
    pub fn with_base_url(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: url.into(),
        }
    }

    /// Get the synthesis URL.
    fn synthesis_url(&self) -> String {
        format!("{}/translate_tts", self.base_url)
    }

    /// Resolve the `ttsspeed` query value from config.
    fn speed_param(config: &TtsConfig) -> &'static str {
        if config.slow { SPEED_SLOW } else { SPEED_NORMAL }
    }
}

impl TtsSynthesizer for GttsProvider {
    fn name(&self) -> &'static str {
        Self::PROVIDER_NAME
    }

    async fn synthesize(&self, text: &str, config: &TtsConfig) -> Result<Vec<u8>, TtsError> {
        let lang = config.language.code();
        let textlen = text.chars().count().to_string();

        debug!(
            provider = Self::PROVIDER_NAME,
            lang,
            text_len = text.len(),
            slow = config.slow,
            "Sending gTTS synthesis request"
        );

        let response = self
            .client
            .get(self.synthesis_url())
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", lang),
                ("ttsspeed", Self::speed_param(config)),
                ("total", "1"),
                ("idx", "0"),
                ("textlen", textlen.as_str()),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TtsError::HttpError {
                        provider: Self::PROVIDER_NAME.into(),
                        message: "request timed out".into(),
                    }
                } else if e.is_connect() {
                    TtsError::HttpError {
                        provider: Self::PROVIDER_NAME.into(),
                        message: format!("cannot connect to speech endpoint: {e}"),
                    }
                } else {
                    TtsError::HttpError {
                        provider: Self::PROVIDER_NAME.into(),
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TtsError::ApiError {
                provider: Self::PROVIDER_NAME.into(),
                status: status.as_u16(),
                message,
            });
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| TtsError::HttpError {
                provider: Self::PROVIDER_NAME.into(),
                message: format!("failed to read audio body: {e}"),
            })?
            .to_vec();

        if audio.is_empty() {
            return Err(TtsError::EmptyAudio {
                provider: Self::PROVIDER_NAME.into(),
            });
        }

        debug!(
            provider = Self::PROVIDER_NAME,
            audio_size = audio.len(),
            "Received gTTS audio"
        );

        Ok(audio)
    }
}

// ============================================================================
// Tests
// ============================================================================
