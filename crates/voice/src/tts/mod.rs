//! Text-to-Speech provider abstraction and implementations.

mod google;

pub use google::GoogleTts;

use {
    anyhow::Result,
    async_trait::async_trait,
    bytes::Bytes,
    serde::{Deserialize, Serialize},
};

/// Audio output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    /// MP3 format (widely compatible).
    #[default]
    Mp3,
    /// Opus in OGG container.
    Opus,
    /// PCM (raw audio).
    Pcm,
}

impl AudioFormat {
    /// MIME type for this format.
    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::Opus => "audio/ogg",
            Self::Pcm => "audio/pcm",
        }
    }

    /// File extension for this format.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Opus => "ogg",
            Self::Pcm => "pcm",
        }
    }
}

/// Audio output from TTS synthesis.
#[derive(Debug, Clone)]
pub struct AudioOutput {
    /// Raw audio data.
    pub data: Bytes,
    /// Audio format.
    pub format: AudioFormat,
}

/// Text-to-Speech provider trait.
///
/// A failed synthesis is an ordinary error value; callers log it and drop
/// the message instead of propagating.
#[async_trait]
pub trait TtsProvider: Send + Sync {
    /// Provider identifier (e.g., "google").
    fn id(&self) -> &'static str;

    /// Human-readable provider name.
    fn name(&self) -> &'static str;

    /// Check if the provider is configured and ready.
    fn is_configured(&self) -> bool;

    /// Convert text to speech using the fixed configured voice.
    async fn synthesize(&self, text: &str) -> Result<AudioOutput>;
}
