//! To-do endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde_json::Value;
use tempo_domain::TodoDraft;

use super::DeleteById;
use crate::response::{failure, success, success_with};
use crate::AppContext;

/// All stored to-do items.
pub async fn get_todos(State(ctx): State<Arc<AppContext>>) -> Json<Value> {
    success_with("todos", ctx.todos.list().await)
}

/// Create or update a to-do item.
pub async fn save_todo(
    State(ctx): State<Arc<AppContext>>,
    Json(draft): Json<TodoDraft>,
) -> Json<Value> {
    match ctx.todos.save(draft).await {
        Ok(item) => success_with("todo", item),
        Err(err) => failure(&err),
    }
}

/// Delete a to-do item by id; succeeds whether or not it exists.
pub async fn delete_todo(
    State(ctx): State<Arc<AppContext>>,
    Json(input): Json<DeleteById>,
) -> Json<Value> {
    match ctx.todos.delete(&input.id).await {
        Ok(()) => success(),
        Err(err) => failure(&err),
    }
}
