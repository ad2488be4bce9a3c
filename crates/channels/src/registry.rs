//! In-memory channel registry with write-through persistence.

use {tokio::sync::RwLock, tracing::info};

use crate::{error::Result, store::FileStore};

/// The authoritative set of channels the bot replies in.
///
/// Holds the list in memory and writes it back to the [`FileStore`] on
/// every mutation, before the caller sees the result. Uniqueness is
/// enforced on insert; insertion order is kept but carries no meaning.
pub struct ChannelRegistry {
    channels: RwLock<Vec<u64>>,
    store: FileStore,
}

impl ChannelRegistry {
    /// Create an empty registry backed by `store`. Call [`Self::load`]
    /// before processing any messages.
    pub fn new(store: FileStore) -> Self {
        Self {
            channels: RwLock::new(Vec::new()),
            store,
        }
    }

    /// Replace the in-memory list with the persisted one.
    pub async fn load(&self) {
        let channels = self.store.load().await;
        info!(count = channels.len(), "loaded reply channels");
        *self.channels.write().await = channels;
    }

    /// Add a channel if absent and persist. Returns whether it was newly
    /// added. Repeated calls with the same id are no-ops.
    pub async fn register(&self, channel: u64) -> Result<bool> {
        let mut channels = self.channels.write().await;
        if channels.contains(&channel) {
            return Ok(false);
        }
        channels.push(channel);
        if let Err(e) = self.store.save(&channels).await {
            // Keep memory and disk consistent: undo the append.
            channels.pop();
            return Err(e);
        }
        Ok(true)
    }

    /// Remove a channel if present and persist. Returns whether it was
    /// removed.
    pub async fn deregister(&self, channel: u64) -> Result<bool> {
        let mut channels = self.channels.write().await;
        let Some(pos) = channels.iter().position(|c| *c == channel) else {
            return Ok(false);
        };
        let removed = channels.remove(pos);
        if let Err(e) = self.store.save(&channels).await {
            channels.insert(pos, removed);
            return Err(e);
        }
        Ok(true)
    }

    /// Whether the channel is currently registered.
    pub async fn contains(&self, channel: u64) -> bool {
        self.channels.read().await.contains(&channel)
    }

    /// Snapshot of the registered channels.
    pub async fn list(&self) -> Vec<u64> {
        self.channels.read().await.clone()
    }
}
