//! Translate-and-speak pipeline.
//!
//! Kept free of gateway types so the drop-on-failure behavior is testable
//! without a Discord connection, like the command execution in
//! [`crate::commands`].

use {
    dolmetscher_translate::Translator,
    dolmetscher_voice::{AudioOutput, TtsProvider},
    tracing::error,
};

/// Run the two provider calls for a relayed message.
///
/// Either step failing drops the message: the error is logged, synthesis is
/// not attempted after a failed translation, and `None` means the caller
/// sends no reply at all.
pub async fn translate_and_speak(
    translator: &dyn Translator,
    tts: &dyn TtsProvider,
    content: &str,
) -> Option<(String, AudioOutput)> {
    let translated = match translator.translate(content).await {
        Ok(translated) => translated,
        Err(e) => {
            error!(error = %e, "translation failed");
            return None;
        },
    };

    let audio = match tts.synthesize(&translated).await {
        Ok(audio) => audio,
        Err(e) => {
            error!(error = %e, "speech synthesis failed");
            return None;
        },
    };

    Some((translated, audio))
}
