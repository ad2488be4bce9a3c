//! Configuration loading for the bot.
//!
//! Config file: optional `dolmetscher.toml` in the working directory.
//! Secrets never live in the config file: the Discord token comes from the
//! `DISCORD_BOT_TOKEN` environment variable and the Google API key from the
//! credentials file named by the config.

pub mod loader;
pub mod schema;

pub use {
    loader::{Credentials, Error, Settings},
    schema::BotConfig,
};
