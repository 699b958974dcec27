//! End-to-end synthesis tests against mock provider endpoints.

use std::path::Path;

use serial_test::serial;
use wiremock::matchers::{header, method, path as url_path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use outloud::{save_speech, ElevenLabsProvider, GttsProvider, TtsConfig, TtsError};

fn fake_mp3() -> Vec<u8> {
    let mut bytes = b"ID3".to_vec();
    bytes.extend_from_slice(&[0u8; 64]);
    bytes
}

/// "Hello world" through the free provider lands in out.mp3, non-empty,
/// requested with language "en" at normal speed.
#[tokio::test]
async fn gtts_hello_world_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(url_path("/translate_tts"))
        .and(query_param("tl", "en"))
        .and(query_param("ttsspeed", "1"))
        .and(query_param("q", "Hello world"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(fake_mp3()))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.mp3");

    let provider = GttsProvider::with_base_url(server.uri());
    save_speech(&provider, "Hello world", &TtsConfig::default(), &out)
        .await
        .unwrap();

    let metadata = std::fs::metadata(&out).unwrap();
    assert!(metadata.len() > 0, "output file should not be empty");
}

#[tokio::test]
#[serial]
async fn elevenlabs_writes_audio_file() {
    // SAFETY: env-mutating tests are serialized with #[serial]
    unsafe {
        std::env::set_var("ELEVEN_API_KEY", "test-key");
    }

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(query_param("output_format", "mp3_22050_32"))
        .and(header("xi-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(fake_mp3()))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("speech.mp3");

    let provider = ElevenLabsProvider::with_base_url(server.uri()).unwrap();
    save_speech(&provider, "Hello world", &TtsConfig::default(), &out)
        .await
        .unwrap();

    assert!(std::fs::metadata(&out).unwrap().len() > 0);

    // SAFETY: see above
    unsafe {
        std::env::remove_var("ELEVEN_API_KEY");
    }
}

/// Without an API key the commercial provider fails before anything is
/// written to disk.
#[tokio::test]
#[serial]
async fn elevenlabs_missing_key_fails_before_file_write() {
    // SAFETY: env-mutating tests are serialized with #[serial]
    unsafe {
        std::env::remove_var("ELEVEN_API_KEY");
        std::env::remove_var("ELEVENLABS_API_KEY");
    }

    let result = ElevenLabsProvider::new();
    assert!(matches!(result, Err(TtsError::MissingApiKey { .. })));
    assert!(!Path::new("speech.mp3").exists());
}

#[tokio::test]
async fn gtts_service_error_propagates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(url_path("/translate_tts"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.mp3");

    let provider = GttsProvider::with_base_url(server.uri());
    let result = save_speech(&provider, "hi", &TtsConfig::default(), &out).await;

    assert!(matches!(result, Err(TtsError::ApiError { status: 500, .. })));
    assert!(!out.exists(), "no file should be written on failure");
}
