//! Google Cloud Text-to-Speech provider.

use {
    crate::{
        config::TtsConfig,
        tts::{AudioFormat, AudioOutput, TtsProvider},
    },
    anyhow::{Result, anyhow},
    async_trait::async_trait,
    bytes::Bytes,
    reqwest::Client,
    secrecy::{ExposeSecret, Secret},
    serde::{Deserialize, Serialize},
    tracing::debug,
};

const DEFAULT_BASE_URL: &str = "https://texttospeech.googleapis.com";

/// Google Cloud Text-to-Speech provider.
pub struct GoogleTts {
    api_key: Option<Secret<String>>,
    config: TtsConfig,
    client: Client,
    base_url: String,
}

impl GoogleTts {
    /// Create a new Google Cloud TTS provider from config.
    #[must_use]
    pub fn new(api_key: Option<Secret<String>>, config: &TtsConfig) -> Self {
        let api_key = api_key.or_else(|| std::env::var("GOOGLE_API_KEY").ok().map(Secret::new));

        Self {
            api_key,
            config: config.clone(),
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.into(),
        }
    }

    /// Override the API base URL (for tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl TtsProvider for GoogleTts {
    fn id(&self) -> &'static str {
        "google"
    }

    fn name(&self) -> &'static str {
        "Google Cloud TTS"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn synthesize(&self, text: &str) -> Result<AudioOutput> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| anyhow!("Google Cloud TTS API key not configured"))?;

        // Map output format to Google's encoding
        let audio_encoding = match self.config.audio_encoding {
            AudioFormat::Mp3 => "MP3",
            AudioFormat::Opus => "OGG_OPUS",
            AudioFormat::Pcm => "LINEAR16",
        };

        let req_body = SynthesizeRequestBody {
            input: SynthesisInput {
                text: text.to_string(),
            },
            voice: VoiceSelectionParams {
                language_code: self.config.language_code.clone(),
                name: self.config.voice.clone(),
                ssml_gender: Some(self.config.ssml_gender.as_str().into()),
            },
            audio_config: AudioConfig {
                audio_encoding: audio_encoding.into(),
                speaking_rate: self.config.speaking_rate,
                pitch: self.config.pitch,
            },
        };

        let url = format!(
            "{}/v1/text:synthesize?key={}",
            self.base_url,
            api_key.expose_secret()
        );

        debug!(
            chars = text.len(),
            voice = %self.config.voice,
            encoding = audio_encoding,
            "requesting speech synthesis"
        );

        let resp = self.client.post(&url).json(&req_body).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(anyhow!("Google Cloud TTS API error {}: {}", status, body));
        }

        let synth_resp: SynthesizeResponse = resp.json().await?;

        // Decode base64 audio content
        use base64::Engine;
        let audio_data =
            base64::engine::general_purpose::STANDARD.decode(&synth_resp.audio_content)?;

        debug!(bytes = audio_data.len(), "synthesized audio received");

        Ok(AudioOutput {
            data: Bytes::from(audio_data),
            format: self.config.audio_encoding,
        })
    }
}

// ── API request/response types ─────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeRequestBody {
    input: SynthesisInput,
    voice: VoiceSelectionParams,
    audio_config: AudioConfig,
}

#[derive(Serialize)]
struct SynthesisInput {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceSelectionParams {
    language_code: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    ssml_gender: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig {
    audio_encoding: String,
    speaking_rate: f32,
    pitch: f32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    audio_content: String,
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {
        super::*,
        base64::Engine,
        wiremock::{
            Mock, MockServer, ResponseTemplate,
            matchers::{body_partial_json, method, path},
        },
    };

    fn provider(base_url: String) -> GoogleTts {
        GoogleTts::new(Some(Secret::new("test-api-key".into())), &TtsConfig::default())
            .with_base_url(base_url)
    }

    #[test]
    fn test_not_configured_without_key() {
        let tts = GoogleTts::new(None, &TtsConfig::default());
        if std::env::var("GOOGLE_API_KEY").is_err() {
            assert!(!tts.is_configured());
        }
    }

    #[test]
    fn test_id_and_name() {
        let tts = GoogleTts::new(None, &TtsConfig::default());
        assert_eq!(tts.id(), "google");
        assert_eq!(tts.name(), "Google Cloud TTS");
    }

    #[tokio::test]
    async fn test_synthesize_success() {
        let mock_server = MockServer::start().await;

        let audio = b"fake mp3 bytes";
        let encoded = base64::engine::general_purpose::STANDARD.encode(audio);
        let response_body = format!(r#"{{"audioContent": "{encoded}"}}"#);

        Mock::given(method("POST"))
            .and(path("/v1/text:synthesize"))
            .and(body_partial_json(serde_json::json!({
                "input": {"text": "Guten Morgen"},
                "voice": {
                    "languageCode": "de-DE",
                    "name": "de-DE-Wavenet-B",
                    "ssmlGender": "MALE"
                },
                "audioConfig": {"audioEncoding": "MP3"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string(response_body))
            .mount(&mock_server)
            .await;

        let output = provider(mock_server.uri())
            .synthesize("Guten Morgen")
            .await
            .unwrap();
        assert_eq!(output.data.as_ref(), audio);
        assert_eq!(output.format, AudioFormat::Mp3);
    }

    #[tokio::test]
    async fn test_synthesize_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/text:synthesize"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let err = provider(mock_server.uri())
            .synthesize("hallo")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_synthesize_invalid_base64_is_an_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/text:synthesize"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"audioContent": "%%%"}"#),
            )
            .mount(&mock_server)
            .await;

        assert!(provider(mock_server.uri()).synthesize("hallo").await.is_err());
    }
}
