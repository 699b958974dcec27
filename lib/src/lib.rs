//! Outloud
//!
//! Small text-to-speech library that converts text to MP3 audio through
//! interchangeable providers and can hand the result to the host's default
//! audio player.
//!
//! ## Features
//!
//! - **Two providers**: the free Google Translate speech endpoint (gTTS)
//!   and the commercial ElevenLabs API
//! - **Save or speak**: write the MP3 to a caller-supplied path, with or
//!   without immediate playback
//! - **Contained playback**: launching the OS audio player never fails the
//!   caller; any playback problem degrades to a printed fallback message
//! - **Async-first**: built on tokio, with native async traits at the
//!   provider seam
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::path::Path;
//! use outloud::{speak_with_gtts, save_with_elevenlabs};
//!
//! // Synthesize, save and play through the default audio player
//! speak_with_gtts("Hello, world!", Path::new("hello.mp3")).await?;
//!
//! // Just save the audio (needs ELEVEN_API_KEY in the environment)
//! save_with_elevenlabs("Hello, world!", Path::new("hello.mp3")).await?;
//! ```
//!
//! ## Module Structure
//!
//! - [`types`] - Request configuration (language, speed, voice overrides)
//! - [`errors`] - Error types for synthesis and playback
//! - [`traits`] - The `TtsSynthesizer` trait for provider implementations
//! - [`providers`] - The gTTS and ElevenLabs providers
//! - [`playback`] - Launching the host's default audio player
//! - [`speak`] - High-level synthesize/save/play operations

pub mod errors;
pub mod playback;
pub mod providers;
pub mod speak;
pub mod traits;
pub mod types;

// Re-export main types at crate root for convenience
pub use errors::TtsError;
pub use playback::play_file;
pub use providers::{ElevenLabsProvider, GttsProvider};
pub use speak::{
    save_speech, save_with_elevenlabs, save_with_gtts, speak, speak_with_elevenlabs,
    speak_with_gtts,
};
pub use traits::TtsSynthesizer;
pub use types::{Language, TtsConfig};
