//! JSON-backed motivation config store.

use std::path::PathBuf;

use async_trait::async_trait;
use tempo_core::MotivationStore;
use tempo_domain::{MotivationConfig, Result};

use super::JsonDocument;

/// Singleton motivation configuration persisted as a JSON object.
pub struct JsonMotivationStore {
    document: JsonDocument<MotivationConfig>,
}

impl JsonMotivationStore {
    /// Create a store for the motivation file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { document: JsonDocument::new(path) }
    }
}

#[async_trait]
impl MotivationStore for JsonMotivationStore {
    async fn load(&self) -> Result<MotivationConfig> {
        self.document.load_or(MotivationConfig::default).await
    }

    async fn save(&self, config: &MotivationConfig) -> Result<()> {
        self.document.store(config).await
    }
}
