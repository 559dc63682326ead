//! JSON-backed notification settings store.

use std::path::PathBuf;

use async_trait::async_trait;
use tempo_core::NotificationSettingsStore;
use tempo_domain::{NotificationSettings, Result};

use super::JsonDocument;

/// Singleton notification settings persisted as a JSON object.
pub struct JsonNotificationSettingsStore {
    document: JsonDocument<NotificationSettings>,
}

impl JsonNotificationSettingsStore {
    /// Create a store for the settings file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { document: JsonDocument::new(path) }
    }
}

#[async_trait]
impl NotificationSettingsStore for JsonNotificationSettingsStore {
    async fn load(&self) -> Result<NotificationSettings> {
        self.document.load_or(NotificationSettings::default).await
    }

    async fn save(&self, settings: &NotificationSettings) -> Result<()> {
        self.document.store(settings).await
    }
}
