//! Translation configuration types.

use serde::{Deserialize, Serialize};

/// Translation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateConfig {
    /// Target language code (BCP-47, e.g. "de").
    pub target_lang: String,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            target_lang: "de".into(),
        }
    }
}
