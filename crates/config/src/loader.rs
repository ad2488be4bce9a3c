//! Startup settings: config file, bot token, service credentials.

use std::path::{Path, PathBuf};

use {
    secrecy::Secret,
    serde::Deserialize,
    tracing::debug,
};

use crate::schema::BotConfig;

/// Default config file name, looked up in the working directory.
const CONFIG_FILENAME: &str = "dolmetscher.toml";

/// Fatal configuration errors. Any of these aborts startup before the
/// gateway connection is attempted.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("DISCORD_BOT_TOKEN environment variable not set")]
    MissingToken,

    #[error("credentials file not found at {path}")]
    CredentialsNotFound { path: PathBuf },

    #[error("cannot read credentials file {path}: {source}")]
    CredentialsUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid credentials file {path}: {source}")]
    CredentialsInvalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot read config file {path}: {source}")]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    ConfigInvalid {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Google service credentials. The file is a small JSON document carrying
/// the API key used for both the translation and synthesis services.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    /// API key for the Google Cloud REST endpoints.
    pub api_key: Secret<String>,
}

impl Credentials {
    /// Load credentials from `path`. A missing or malformed file is fatal.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Err(Error::CredentialsNotFound {
                path: path.to_path_buf(),
            });
        }
        let raw = std::fs::read_to_string(path).map_err(|e| Error::CredentialsUnreadable {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&raw).map_err(|e| Error::CredentialsInvalid {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Fully resolved startup settings.
pub struct Settings {
    /// Discord bot token.
    pub discord_token: Secret<String>,
    /// Google API key from the credentials file.
    pub google_api_key: Secret<String>,
    /// Everything else.
    pub config: BotConfig,
}

impl Settings {
    /// Load settings for process startup.
    ///
    /// An explicitly given config path must exist; the default path is
    /// optional and falls back to defaults. The bot token and the
    /// credentials file are both required.
    pub fn load(config_path: Option<&Path>) -> Result<Self, Error> {
        let config = match config_path {
            Some(path) => Self::load_config(path)?,
            None => {
                let default = Path::new(CONFIG_FILENAME);
                if default.exists() {
                    Self::load_config(default)?
                } else {
                    debug!("no config file found, using defaults");
                    BotConfig::default()
                }
            },
        };

        let discord_token = std::env::var("DISCORD_BOT_TOKEN")
            .map(Secret::new)
            .map_err(|_| Error::MissingToken)?;

        let credentials = Credentials::from_path(&config.credentials_path)?;

        Ok(Self {
            discord_token,
            google_api_key: credentials.api_key,
            config,
        })
    }

    fn load_config(path: &Path) -> Result<BotConfig, Error> {
        debug!(path = %path.display(), "loading config");
        let raw = std::fs::read_to_string(path).map_err(|e| Error::ConfigUnreadable {
            path: path.to_path_buf(),
            source: e,
        })?;
        BotConfig::from_toml_str(&raw).map_err(|e| Error::ConfigInvalid {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {super::*, secrecy::ExposeSecret, tempfile::TempDir};

    #[test]
    fn credentials_missing_file_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let err = Credentials::from_path(&tmp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, Error::CredentialsNotFound { .. }));
    }

    #[test]
    fn credentials_invalid_json_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("creds.json");
        std::fs::write(&path, "{oops").unwrap();
        let err = Credentials::from_path(&path).unwrap_err();
        assert!(matches!(err, Error::CredentialsInvalid { .. }));
    }

    #[test]
    fn credentials_parse() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("creds.json");
        std::fs::write(&path, r#"{"api_key": "abc123"}"#).unwrap();
        let creds = Credentials::from_path(&path).unwrap();
        assert_eq!(creds.api_key.expose_secret(), "abc123");
    }
}
