//! Message translation for the relay pipeline.
//!
//! Provides a provider-agnostic [`Translator`] trait with a Google Cloud
//! Translation implementation. The target locale is fixed per process via
//! [`TranslateConfig`].

pub mod config;
pub mod google;

pub use {config::TranslateConfig, google::GoogleTranslate};

use {anyhow::Result, async_trait::async_trait};

/// Translation provider trait.
///
/// A failed translation is an ordinary error value; callers log it and drop
/// the message instead of propagating.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Provider identifier (e.g., "google").
    fn id(&self) -> &'static str;

    /// Check if the provider is configured and ready.
    fn is_configured(&self) -> bool;

    /// Translate `text` into the configured target locale.
    async fn translate(&self, text: &str) -> Result<String>;
}
