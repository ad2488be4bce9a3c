//! Gateway client construction and startup.

use std::sync::Arc;

use {
    anyhow::{Context as _, Result},
    dolmetscher_channels::ChannelRegistry,
    dolmetscher_translate::Translator,
    dolmetscher_voice::TtsProvider,
    secrecy::ExposeSecret,
    serenity::Client,
};

use crate::{config::DiscordConfig, handler::Handler};

/// Connect to the Discord gateway and run the event loop until the client
/// stops. The registry must be loaded before calling this.
pub async fn run(
    config: DiscordConfig,
    registry: Arc<ChannelRegistry>,
    translator: Arc<dyn Translator>,
    tts: Arc<dyn TtsProvider>,
) -> Result<()> {
    let token = config.token.clone();
    let handler = Handler::new(config, registry, translator, tts);

    let mut client = Client::builder(token.expose_secret(), Handler::intents())
        .event_handler(handler)
        .await
        .context("failed to build discord client")?;

    client.start().await.context("discord client stopped")?;
    Ok(())
}
