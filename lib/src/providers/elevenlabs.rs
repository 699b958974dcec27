//! ElevenLabs cloud TTS provider.
//!
//! Implements the ElevenLabs `text-to-speech` REST endpoint with plain
//! reqwest.
//!
//! ## Environment Variables
//!
//! The API key is read from:
//! - `ELEVEN_API_KEY` (preferred)
//! - `ELEVENLABS_API_KEY` (alternative)
//!
//! ## Examples
//!
//! ```ignore
//! use outloud::providers::ElevenLabsProvider;
//! use outloud::{TtsSynthesizer, TtsConfig};
//!
//! let provider = ElevenLabsProvider::new()?;
//! let audio = provider.synthesize("Hello, world!", &TtsConfig::default()).await?;
//! ```

use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::errors::TtsError;
use crate::traits::TtsSynthesizer;
use crate::types::TtsConfig;

/// Default base URL for the ElevenLabs API.
const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";

/// Default ElevenLabs voice ID (Aria - a versatile female voice).
const DEFAULT_VOICE_ID: &str = "9BWtsMINqrJLrRacOk9x";

/// Default ElevenLabs model, tuned for low-latency synthesis.
const DEFAULT_MODEL_ID: &str = "eleven_turbo_v2";

/// Fixed output encoding requested from the API.
const OUTPUT_FORMAT: &str = "mp3_22050_32";

/// Environment variables checked for the API key, in order.
const API_KEY_VARS: [&str; 2] = ["ELEVEN_API_KEY", "ELEVENLABS_API_KEY"];

/// Request body for the `text-to-speech` endpoint.
#[derive(Debug, Serialize)]
struct CreateSpeechBody<'a> {
    /// The text to synthesize.
    text: &'a str,
    /// The model to synthesize with.
    model_id: &'a str,
}

/// ElevenLabs cloud TTS provider.
///
/// Implements the `TtsSynthesizer` trait against the ElevenLabs
/// text-to-speech API. Requires an API key in the environment.
pub struct ElevenLabsProvider {
    client: Client,
    base_url: String,
    api_key: String,
    /// Default voice ID to use when none is requested.
    default_voice_id: String,
    /// Default model ID to use when none is requested.
    default_model_id: String,
}

impl std::fmt::Debug for ElevenLabsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElevenLabsProvider")
            .field("base_url", &self.base_url)
            .field("default_voice_id", &self.default_voice_id)
            .field("default_model_id", &self.default_model_id)
            .finish_non_exhaustive()
    }
}

impl ElevenLabsProvider {
    /// Provider name constant for logs and error messages.
    const PROVIDER_NAME: &'static str = "elevenlabs";

    /// Create a new ElevenLabs provider using environment variables.
    ///
    /// The API key is read from `ELEVEN_API_KEY` or `ELEVENLABS_API_KEY`.
    ///
    /// ## Errors
    ///
    /// Returns `TtsError::MissingApiKey` if no API key is found in the
    /// environment. No request is made and no file is written in that case.
    pub fn new() -> Result<Self, TtsError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a new ElevenLabs provider with a custom base URL.
    ///
    /// Useful for testing with mock servers.
    ///
    /// ## Errors
    ///
    /// Returns `TtsError::MissingApiKey` if no API key is found in the
    /// environment.
    pub fn with_base_url(url: impl Into<String>) -> Result<Self, TtsError> {
        let api_key = Self::read_api_key()?;

        Ok(Self {
            client: Client::new(),
            base_url: url.into(),
            api_key,
            default_voice_id: DEFAULT_VOICE_ID.into(),
            default_model_id: DEFAULT_MODEL_ID.into(),
        })
    }

    /// Set the default voice ID.
    #[must_use]
    pub fn with_default_voice(mut self, voice_id: impl Into<String>) -> Self {
        self.default_voice_id = voice_id.into();
        self
    }

    /// Set the default model ID.
    #[must_use]
    pub fn with_default_model(mut self, model_id: impl Into<String>) -> Self {
        self.default_model_id = model_id.into();
        self
    }

    /// Read the API key from the environment.
    fn read_api_key() -> Result<String, TtsError> {
        API_KEY_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok())
            .filter(|key| !key.is_empty())
            .ok_or(TtsError::MissingApiKey {
                provider: Self::PROVIDER_NAME.into(),
            })
    }

    /// Get the synthesis URL for a voice.
    fn speech_url(&self, voice_id: &str) -> String {
        format!("{}/v1/text-to-speech/{}", self.base_url, voice_id)
    }
}

impl TtsSynthesizer for ElevenLabsProvider {
    fn name(&self) -> &'static str {
        Self::PROVIDER_NAME
    }

    async fn synthesize(&self, text: &str, config: &TtsConfig) -> Result<Vec<u8>, TtsError> {
        let voice_id = config.voice.as_deref().unwrap_or(&self.default_voice_id);
        let model_id = config.model.as_deref().unwrap_or(&self.default_model_id);

        let body = CreateSpeechBody { text, model_id };

        debug!(
            provider = Self::PROVIDER_NAME,
            voice_id,
            model = model_id,
            text_len = text.len(),
            "Sending ElevenLabs TTS request"
        );

        let response = self
            .client
            .post(self.speech_url(voice_id))
            .query(&[("output_format", OUTPUT_FORMAT)])
            .header("xi-api-key", &self.api_key)
            .json(&body)
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
                        message: format!("cannot connect to API: {e}"),
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
            "Received ElevenLabs audio response"
        );

        Ok(audio)
    }
}

// ============================================================================
// Tests
// ============================================================================
