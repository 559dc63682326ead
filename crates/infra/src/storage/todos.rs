//! JSON-backed to-do store.

use std::path::PathBuf;

use async_trait::async_trait;
use tempo_core::TodoStore;
use tempo_domain::{Result, TodoItem};

use super::JsonDocument;

/// To-do list persisted as a JSON array.
pub struct JsonTodoStore {
    document: JsonDocument<Vec<TodoItem>>,
}

impl JsonTodoStore {
    /// Create a store for the todos file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { document: JsonDocument::new(path) }
    }
}

#[async_trait]
impl TodoStore for JsonTodoStore {
    async fn load(&self) -> Result<Vec<TodoItem>> {
        self.document.load_or(Vec::new).await
    }

    async fn save(&self, todos: &[TodoItem]) -> Result<()> {
        self.document.store(&todos.to_vec()).await
    }
}
