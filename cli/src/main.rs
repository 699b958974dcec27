//! Outloud CLI - convert text to speech and play it.

use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, ValueEnum, ValueHint};

use outloud::{
    save_speech, speak, ElevenLabsProvider, GttsProvider, Language, TtsConfig, TtsSynthesizer,
};

/// Which TTS provider to synthesize with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Provider {
    /// Free Google Translate speech endpoint
    Gtts,
    /// ElevenLabs API (needs ELEVEN_API_KEY)
    Elevenlabs,
}

#[derive(Parser)]
#[command(name = "outloud")]
#[command(about = "Convert text to MP3 speech and play it", long_about = None)]
#[command(version)]
struct Cli {
    /// Text to speak (reads from stdin if not provided)
    text: Vec<String>,

    /// TTS provider to synthesize with
    #[arg(long, value_enum, default_value_t = Provider::Gtts)]
    provider: Provider,

    /// Where to write the MP3 output
    #[arg(
        long,
        short,
        default_value = "speech.mp3",
        value_name = "PATH",
        value_hint = ValueHint::FilePath
    )]
    output: PathBuf,

    /// Language code, e.g. "en", "fr", "de" (gTTS)
    #[arg(long, value_name = "CODE")]
    lang: Option<String>,

    /// Speak slowly (gTTS)
    #[arg(long)]
    slow: bool,

    /// Voice ID override (ElevenLabs)
    #[arg(long, value_name = "ID")]
    voice: Option<String>,

    /// Model ID override (ElevenLabs)
    #[arg(long, value_name = "ID")]
    model: Option<String>,

    /// Save the audio without playing it
    #[arg(long)]
    no_play: bool,
}

/// Joins multiple arguments into a single string with spaces
fn join_args(args: Vec<String>) -> String {
    args.join(" ")
}

/// Reads text from stdin with a 10,000 character limit
fn read_from_stdin() -> io::Result<String> {
    let mut buffer = String::new();
    let mut handle = io::stdin().take(10_000);
    handle.read_to_string(&mut buffer)?;
    let text = buffer.trim().to_string();

    if text.is_empty() {
        eprintln!("Error: No input provided");
        eprintln!("Usage: outloud <text> or echo \"text\" | outloud");
        std::process::exit(1);
    }

    Ok(text)
}

/// Build the synthesis config from the parsed arguments.
fn build_config(cli: &Cli) -> TtsConfig {
    let mut config = TtsConfig::new().with_slow(cli.slow);

    if let Some(lang) = &cli.lang {
        config = config.with_language(Language::Custom(lang.clone()));
    }
    if let Some(voice) = &cli.voice {
        config = config.with_voice(voice.clone());
    }
    if let Some(model) = &cli.model {
        config = config.with_model(model.clone());
    }

    config
}

/// Synthesize to the output path, then play unless suppressed.
async fn run(
    provider: &impl TtsSynthesizer,
    cli: &Cli,
    text: &str,
    config: &TtsConfig,
) -> Result<(), outloud::TtsError> {
    if cli.no_play {
        save_speech(provider, text, config, &cli.output).await
    } else {
        speak(provider, text, config, &cli.output).await
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let message = if cli.text.is_empty() {
        // No arguments provided, read from stdin
        read_from_stdin()?
    } else {
        // Join all arguments with spaces
        join_args(cli.text.clone())
    };

    let config = build_config(&cli);

    match cli.provider {
        Provider::Gtts => {
            let provider = GttsProvider::new();
            run(&provider, &cli, &message, &config).await?;
        }
        Provider::Elevenlabs => {
            let provider = ElevenLabsProvider::new()?;
            run(&provider, &cli, &message, &config).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_args_multi_word() {
        let args = vec!["Hello".to_string(), "world".to_string()];
        assert_eq!(join_args(args), "Hello world");
    }

    #[test]
    fn test_join_args_single_word() {
        let args = vec!["Hello".to_string()];
        assert_eq!(join_args(args), "Hello");
    }

    #[test]
    fn test_join_args_empty() {
        let args: Vec<String> = vec![];
        assert_eq!(join_args(args), "");
    }

    #[test]
    fn test_join_args_unicode() {
        let args = vec!["Hello".to_string(), "世界".to_string()];
        assert_eq!(join_args(args), "Hello 世界");
    }

    #[test]
    fn test_build_config_defaults() {
        let cli = Cli::parse_from(["outloud", "hello"]);
        let config = build_config(&cli);

        assert_eq!(config.language, Language::English);
        assert!(!config.slow);
        assert!(config.voice.is_none());
        assert!(config.model.is_none());
    }

    #[test]
    fn test_build_config_with_flags() {
        let cli = Cli::parse_from([
            "outloud",
            "--lang",
            "fr",
            "--slow",
            "--voice",
            "v-1",
            "--model",
            "m-1",
            "bonjour",
        ]);
        let config = build_config(&cli);

        assert_eq!(config.language, Language::Custom("fr".into()));
        assert!(config.slow);
        assert_eq!(config.voice.as_deref(), Some("v-1"));
        assert_eq!(config.model.as_deref(), Some("m-1"));
    }

    #[test]
    fn test_default_output_path() {
        let cli = Cli::parse_from(["outloud", "hello"]);
        assert_eq!(cli.output, PathBuf::from("speech.mp3"));
    }

    #[test]
    fn test_default_provider_is_gtts() {
        let cli = Cli::parse_from(["outloud", "hello"]);
        assert_eq!(cli.provider, Provider::Gtts);
    }
}
