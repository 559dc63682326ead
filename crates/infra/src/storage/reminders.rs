//! JSON-backed reminder store.

use std::path::PathBuf;

use async_trait::async_trait;
use tempo_core::ReminderStore;
use tempo_domain::{Reminder, Result};

use super::JsonDocument;

/// Reminder list persisted as a JSON array.
pub struct JsonReminderStore {
    document: JsonDocument<Vec<Reminder>>,
}

impl JsonReminderStore {
    /// Create a store for the reminders file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { document: JsonDocument::new(path) }
    }
}

#[async_trait]
impl ReminderStore for JsonReminderStore {
    async fn load(&self) -> Result<Vec<Reminder>> {
        self.document.load_or(Vec::new).await
    }

    async fn save(&self, reminders: &[Reminder]) -> Result<()> {
        self.document.store(&reminders.to_vec()).await
    }
}
