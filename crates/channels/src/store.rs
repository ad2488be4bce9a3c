//! JSON file store for the registered channel list.

use std::path::PathBuf;

use {
    tokio::fs,
    tracing::{info, warn},
};

use crate::error::Result;

/// File-backed store. The channel list lives in a single JSON array.
///
/// Writes are a full overwrite of the file. There is deliberately no atomic
/// rename: a crash mid-write can corrupt the file, and [`FileStore::load`]
/// falls back to an empty list in that case.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Read the persisted channel list.
    ///
    /// An absent, unreadable or unparsable file yields an empty list. This
    /// operation never fails observably; problems are logged and swallowed.
    pub async fn load(&self) -> Vec<u64> {
        if !fs::try_exists(&self.path).await.unwrap_or(false) {
            info!(path = %self.path.display(), "channel file not found, starting empty");
            return Vec::new();
        }
        let data = match fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cannot read channel file, starting empty");
                return Vec::new();
            },
        };
        let mut channels: Vec<u64> = match serde_json::from_str(&data) {
            Ok(channels) => channels,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "channel file is empty or invalid JSON, starting empty");
                return Vec::new();
            },
        };
        // Discord ids are nonzero snowflakes; a hand-edited file can hold 0,
        // which no channel id may be constructed from.
        let before = channels.len();
        channels.retain(|&id| id != 0);
        if channels.len() != before {
            warn!(
                path = %self.path.display(),
                dropped = before - channels.len(),
                "dropped invalid zero channel ids"
            );
        }
        channels
    }

    /// Overwrite the file with the given channel list.
    pub async fn save(&self, channels: &[u64]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(channels)?;
        fs::write(&self.path, json.as_bytes()).await?;
        Ok(())
    }
}
