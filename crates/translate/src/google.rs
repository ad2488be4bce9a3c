//! Google Cloud Translation provider.

use {
    crate::{Translator, config::TranslateConfig},
    anyhow::{Result, anyhow},
    async_trait::async_trait,
    reqwest::Client,
    secrecy::{ExposeSecret, Secret},
    serde::{Deserialize, Serialize},
    tracing::debug,
};

const DEFAULT_BASE_URL: &str = "https://translation.googleapis.com";

/// Google Cloud Translation provider (v2 REST API).
pub struct GoogleTranslate {
    api_key: Option<Secret<String>>,
    target_lang: String,
    client: Client,
    base_url: String,
}

impl GoogleTranslate {
    /// Create a new Google Cloud Translation provider.
    #[must_use]
    pub fn new(api_key: Option<Secret<String>>, config: &TranslateConfig) -> Self {
        let api_key = api_key.or_else(|| std::env::var("GOOGLE_API_KEY").ok().map(Secret::new));

        Self {
            api_key,
            target_lang: config.target_lang.clone(),
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
impl Translator for GoogleTranslate {
    fn id(&self) -> &'static str {
        "google"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn translate(&self, text: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| anyhow!("Google Cloud Translation API key not configured"))?;

        let req_body = TranslateRequestBody {
            q: vec![text.to_string()],
            target: self.target_lang.clone(),
            // Message content is passed through as-is, so plain text mode.
            format: "text".into(),
        };

        let url = format!(
            "{}/language/translate/v2?key={}",
            self.base_url,
            api_key.expose_secret()
        );

        debug!(chars = text.len(), target = %self.target_lang, "requesting translation");

        let resp = self.client.post(&url).json(&req_body).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(anyhow!(
                "Google Cloud Translation API error {}: {}",
                status,
                body
            ));
        }

        let translate_resp: TranslateResponse = resp.json().await?;

        let translated = translate_resp
            .data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or_else(|| anyhow!("Google Cloud Translation returned no translations"))?;

        debug!(chars = translated.len(), "translation received");
        Ok(translated)
    }
}

// ── API request/response types ─────────────────────────────────────────────

#[derive(Serialize)]
struct TranslateRequestBody {
    q: Vec<String>,
    target: String,
    format: String,
}

#[derive(Deserialize)]
struct TranslateResponse {
    data: TranslationsList,
}

#[derive(Deserialize)]
struct TranslationsList {
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
}
