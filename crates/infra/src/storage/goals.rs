//! JSON-backed goal store.

use std::path::PathBuf;

use async_trait::async_trait;
use tempo_core::GoalStore;
use tempo_domain::{Goal, Result};

use super::JsonDocument;

/// Goal list persisted as a JSON array.
pub struct JsonGoalStore {
    document: JsonDocument<Vec<Goal>>,
}

impl JsonGoalStore {
    /// Create a store for the goals file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { document: JsonDocument::new(path) }
    }
}

#[async_trait]
impl GoalStore for JsonGoalStore {
    async fn load(&self) -> Result<Vec<Goal>> {
        self.document.load_or(Vec::new).await
    }

    async fn save(&self, goals: &[Goal]) -> Result<()> {
        self.document.store(&goals.to_vec()).await
    }
}
