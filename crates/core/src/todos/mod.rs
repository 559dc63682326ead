//! To-do items: a small auxiliary list alongside the activity ledger.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Local;
use tempo_domain::{Result, TempoError, TodoDraft, TodoItem};
use tokio::sync::Mutex;
use tracing::{error, warn};
use uuid::Uuid;

/// Trait for persisting the to-do list.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Load every stored item.
    async fn load(&self) -> Result<Vec<TodoItem>>;

    /// Replace the stored list.
    async fn save(&self, todos: &[TodoItem]) -> Result<()>;
}

/// To-do list service.
pub struct TodoService {
    store: Arc<dyn TodoStore>,
    write_lock: Mutex<()>,
}

impl TodoService {
    /// Create a new to-do service.
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store, write_lock: Mutex::new(()) }
    }

    /// List every stored item.
    pub async fn list(&self) -> Vec<TodoItem> {
        match self.store.load().await {
            Ok(todos) => todos,
            Err(TempoError::Corrupt(detail)) => {
                error!(%detail, "todo file is corrupt; continuing with the empty default");
                Vec::new()
            }
            Err(err) => {
                warn!(error = %err, "failed to load todos; continuing with the empty default");
                Vec::new()
            }
        }
    }

    /// Save an item, assigning `id` and `created_at` when absent.
    pub async fn save(&self, draft: TodoDraft) -> Result<TodoItem> {
        if draft.text.trim().is_empty() {
            return Err(TempoError::InvalidInput("Text cannot be empty".to_string()));
        }

        let _guard = self.write_lock.lock().await;
        let mut todos = self.list().await;

        let existing = draft.id.as_deref().and_then(|id| todos.iter().position(|t| t.id == id));
        let item = match existing {
            Some(index) => {
                let stored = &todos[index];
                let updated = TodoItem {
                    id: stored.id.clone(),
                    text: draft.text,
                    done: draft.done,
                    created_at: stored.created_at,
                };
                todos[index] = updated.clone();
                updated
            }
            None => {
                let created = TodoItem {
                    id: draft.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
                    text: draft.text,
                    done: draft.done,
                    created_at: Some(Local::now().naive_local()),
                };
                todos.push(created.clone());
                created
            }
        };

        self.store.save(&todos).await?;
        Ok(item)
    }

    /// Delete an item by id. Succeeds whether or not the id exists.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut todos = self.list().await;
        let before = todos.len();
        todos.retain(|t| t.id != id);
        if todos.len() != before {
            self.store.save(&todos).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex as StdMutex;

    use super::*;

    #[derive(Default)]
    struct MemTodoStore {
        todos: StdMutex<Vec<TodoItem>>,
    }

    #[async_trait]
    impl TodoStore for MemTodoStore {
        async fn load(&self) -> Result<Vec<TodoItem>> {
            Ok(self.todos.lock().unwrap().clone())
        }

        async fn save(&self, todos: &[TodoItem]) -> Result<()> {
            *self.todos.lock().unwrap() = todos.to_vec();
            Ok(())
        }
    }

    #[tokio::test]
    async fn save_toggle_and_delete_round_trip() {
        let service = TodoService::new(Arc::new(MemTodoStore::default()));

        let item = service
            .save(TodoDraft { id: None, text: "Water plants".into(), done: false })
            .await
            .unwrap();
        assert!(!item.id.is_empty());

        let toggled = service
            .save(TodoDraft { id: Some(item.id.clone()), text: "Water plants".into(), done: true })
            .await
            .unwrap();
        assert!(toggled.done);
        assert_eq!(toggled.created_at, item.created_at);

        service.delete(&item.id).await.unwrap();
        service.delete(&item.id).await.unwrap();
        assert!(service.list().await.is_empty());
    }

    #[tokio::test]
    async fn blank_text_is_rejected() {
        let service = TodoService::new(Arc::new(MemTodoStore::default()));
        let result = service.save(TodoDraft { id: None, text: "  ".into(), done: false }).await;
        assert!(result.is_err());
    }
}
