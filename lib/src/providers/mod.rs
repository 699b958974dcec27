//! TTS provider implementations.

mod elevenlabs;
mod gtts;

pub use elevenlabs::ElevenLabsProvider;
pub use gtts::GttsProvider;
