use std::{path::PathBuf, sync::Arc};

use {
    clap::Parser,
    dolmetscher_channels::{ChannelRegistry, FileStore},
    dolmetscher_config::Settings,
    dolmetscher_discord::DiscordConfig,
    dolmetscher_translate::{GoogleTranslate, Translator},
    dolmetscher_voice::{GoogleTts, TtsProvider},
    tracing::{info, warn},
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

#[derive(Parser)]
#[command(
    name = "dolmetscher",
    about = "Discord bot that translates messages and replies with synthesized speech"
)]
struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, default_value_t = false)]
    json_logs: bool,

    /// Path to the TOML config file (default: ./dolmetscher.toml if present).
    #[arg(long, env = "DOLMETSCHER_CONFIG")]
    config: Option<PathBuf>,
}

fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if cli.json_logs {
        registry
            .with(fmt::layer().json().with_target(true).with_thread_ids(false))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_ansi(true),
            )
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_telemetry(&cli);

    info!(version = env!("CARGO_PKG_VERSION"), "dolmetscher starting");

    // Missing token or credentials aborts here, before connecting.
    let settings = Settings::load(cli.config.as_deref())?;

    let store = FileStore::new(settings.config.registry_path.clone());
    let registry = Arc::new(ChannelRegistry::new(store));
    registry.load().await;

    let translator: Arc<dyn Translator> = Arc::new(GoogleTranslate::new(
        Some(settings.google_api_key.clone()),
        &settings.config.translate,
    ));
    let tts: Arc<dyn TtsProvider> = Arc::new(GoogleTts::new(
        Some(settings.google_api_key.clone()),
        &settings.config.tts,
    ));

    if !translator.is_configured() || !tts.is_configured() {
        warn!("Google API key is empty, relay replies will fail");
    }

    let discord = DiscordConfig {
        token: settings.discord_token.clone(),
        command_prefix: settings.config.command_prefix.clone(),
        admin_role: settings.config.admin_role.clone(),
    };

    dolmetscher_discord::run(discord, registry, translator, tts).await
}
