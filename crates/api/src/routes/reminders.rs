//! Reminder endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde_json::Value;
use tempo_domain::ReminderDraft;

use super::DeleteById;
use crate::response::{failure, success, success_with};
use crate::AppContext;

/// All stored reminders.
pub async fn get_reminders(State(ctx): State<Arc<AppContext>>) -> Json<Value> {
    success_with("reminders", ctx.reminders.list().await)
}

/// Create or update a reminder.
pub async fn save_reminder(
    State(ctx): State<Arc<AppContext>>,
    Json(draft): Json<ReminderDraft>,
) -> Json<Value> {
    match ctx.reminders.save(draft).await {
        Ok(reminder) => success_with("reminder", reminder),
        Err(err) => failure(&err),
    }
}

/// Delete a reminder by id; succeeds whether or not it exists.
pub async fn delete_reminder(
    State(ctx): State<Arc<AppContext>>,
    Json(input): Json<DeleteById>,
) -> Json<Value> {
    match ctx.reminders.delete(&input.id).await {
        Ok(()) => success(),
        Err(err) => failure(&err),
    }
}
