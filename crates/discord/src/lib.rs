//! Discord integration: gateway client, event handler, channel commands.
//!
//! The handler routes every inbound message to exactly one of: ignore (own
//! messages), a channel management command, the translate-and-speak relay
//! pipeline, or a guidance reply pointing at the registered channels.

pub mod client;
pub mod commands;
pub mod config;
pub mod handler;
pub mod pipeline;

pub use {client::run, config::DiscordConfig, handler::Handler};
