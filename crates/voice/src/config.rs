//! Voice configuration types.

use {
    crate::tts::AudioFormat,
    serde::{Deserialize, Serialize},
};

/// SSML voice gender.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SsmlGender {
    #[default]
    Male,
    Female,
    Neutral,
}

impl SsmlGender {
    /// Wire value expected by the synthesis API.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
            Self::Neutral => "NEUTRAL",
        }
    }
}

/// Text-to-Speech settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TtsConfig {
    /// Voice language code (BCP-47, e.g. "de-DE").
    pub language_code: String,

    /// Voice name.
    pub voice: String,

    /// SSML voice gender.
    pub ssml_gender: SsmlGender,

    /// Output audio encoding.
    pub audio_encoding: AudioFormat,

    /// Speaking rate (1.0 = normal).
    pub speaking_rate: f32,

    /// Pitch adjustment in semitones.
    pub pitch: f32,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            language_code: "de-DE".into(),
            voice: "de-DE-Wavenet-B".into(),
            ssml_gender: SsmlGender::Male,
            audio_encoding: AudioFormat::Mp3,
            speaking_rate: 1.0,
            pitch: 0.0,
        }
    }
}
