//! Configuration schema.

use std::path::PathBuf;

use {
    dolmetscher_translate::TranslateConfig,
    dolmetscher_voice::TtsConfig,
    serde::{Deserialize, Serialize},
};

/// Top-level bot configuration. Every field has a default so an absent
/// config file is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Path of the persisted reply-channel list.
    pub registry_path: PathBuf,

    /// Path of the Google service credentials file.
    pub credentials_path: PathBuf,

    /// Prefix that marks a message as a command.
    pub command_prefix: String,

    /// Role required for the channel management commands.
    pub admin_role: String,

    /// Translation settings.
    pub translate: TranslateConfig,

    /// Speech synthesis settings.
    pub tts: TtsConfig,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            registry_path: PathBuf::from("reply_channels.json"),
            credentials_path: PathBuf::from("credentials/service-account.json"),
            command_prefix: "!".into(),
            admin_role: "bot_config".into(),
            translate: TranslateConfig::default(),
            tts: TtsConfig::default(),
        }
    }
}

impl BotConfig {
    /// Parse a TOML config document.
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = BotConfig::default();
        assert_eq!(cfg.registry_path, PathBuf::from("reply_channels.json"));
        assert_eq!(cfg.command_prefix, "!");
        assert_eq!(cfg.admin_role, "bot_config");
        assert_eq!(cfg.translate.target_lang, "de");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = BotConfig::from_toml_str(
            r#"
            admin_role = "moderators"

            [tts]
            voice = "de-DE-Wavenet-A"
            ssml_gender = "female"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.admin_role, "moderators");
        assert_eq!(cfg.tts.voice, "de-DE-Wavenet-A");
        // defaults for unspecified fields
        assert_eq!(cfg.command_prefix, "!");
        assert_eq!(cfg.tts.language_code, "de-DE");
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(BotConfig::from_toml_str("admin_role = [").is_err());
    }
}
