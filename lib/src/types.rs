//! Core types for TTS requests.
//!
//! This module defines the request-side configuration shared by all
//! providers: the target language and the per-request overrides.

use serde::{Deserialize, Serialize};

// ============================================================================
// Language
// ============================================================================

/// Language to synthesize speech in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (the default, request code "en").
    #[default]
    English,
    /// Custom language code (e.g., "fr", "de", "zh-CN").
    Custom(String),
}

impl Language {
    /// Returns the language code sent to the provider.
    ///
    /// ## Examples
    ///
    /// ```
    /// use outloud::types::Language;
    ///
    /// assert_eq!(Language::English.code(), "en");
    /// assert_eq!(Language::Custom("fr".into()).code(), "fr");
    /// ```
    pub fn code(&self) -> &str {
        match self {
            Language::English => "en",
            Language::Custom(code) => code,
        }
    }
}

// ============================================================================
// TTS Config
// ============================================================================

/// Per-request TTS configuration.
///
/// The defaults reproduce the fixed settings of the simple call-through
/// functions in [`crate::speak`]: English, normal speed, provider-default
/// voice and model.
///
/// ## Examples
///
/// ```
/// use outloud::types::{Language, TtsConfig};
///
/// let config = TtsConfig::new()
///     .with_language(Language::Custom("de".into()))
///     .with_slow(true);
/// assert_eq!(config.language.code(), "de");
/// assert!(config.slow);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TtsConfig {
    /// Language to synthesize in.
    pub language: Language,
    /// Slow speech rate (gTTS only; ElevenLabs ignores it).
    pub slow: bool,
    /// Voice ID override (ElevenLabs only).
    pub voice: Option<String>,
    /// Model ID override (ElevenLabs only).
    pub model: Option<String>,
}

impl TtsConfig {
    /// Create a new TtsConfig with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language to synthesize in.
    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Enable or disable slow speech rate.
    #[must_use]
    pub fn with_slow(mut self, slow: bool) -> Self {
        self.slow = slow;
        self
    }

    /// Set the voice ID override.
    #[must_use]
    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = Some(voice.into());
        self
    }

    /// Set the model ID override.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
