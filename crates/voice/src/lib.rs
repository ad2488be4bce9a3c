//! Speech synthesis for translated messages.
//!
//! Provides a provider-agnostic [`TtsProvider`] trait with a Google Cloud
//! Text-to-Speech implementation. Voice, locale, gender and output encoding
//! are fixed per process via [`TtsConfig`].

pub mod config;
pub mod tts;

pub use {
    config::{SsmlGender, TtsConfig},
    tts::{AudioFormat, AudioOutput, GoogleTts, TtsProvider},
};
