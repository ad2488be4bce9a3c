//! Registered reply channels and their on-disk persistence.
//!
//! The registry is the single source of truth for which channels the bot
//! relays messages from. It is backed by a small JSON file that outlives
//! the process.

pub mod error;
pub mod registry;
pub mod store;

pub use {
    error::{Error, Result},
    registry::ChannelRegistry,
    store::FileStore,
};
