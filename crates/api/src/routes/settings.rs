//! Motivation and notification settings endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use tempo_domain::{MotivationDraft, NotificationSettings};

use crate::response::{failure, success, success_with};
use crate::AppContext;

/// Body for an immediate delivery attempt.
#[derive(Debug, Deserialize)]
pub struct TestNotification {
    pub title: String,
    #[serde(default)]
    pub message: String,
}

/// Current motivation configuration.
pub async fn get_motivation_settings(State(ctx): State<Arc<AppContext>>) -> Json<Value> {
    success_with("settings", ctx.reminders.motivation_settings().await)
}

/// Save motivation settings; rotation state is preserved.
pub async fn save_motivation_settings(
    State(ctx): State<Arc<AppContext>>,
    Json(draft): Json<MotivationDraft>,
) -> Json<Value> {
    match ctx.reminders.save_motivation_settings(draft).await {
        Ok(settings) => success_with("settings", settings),
        Err(err) => failure(&err),
    }
}

/// Current notification settings.
pub async fn get_notification_settings(State(ctx): State<Arc<AppContext>>) -> Json<Value> {
    success_with("settings", ctx.reminders.notification_settings().await)
}

/// Save the notification on/off switch.
pub async fn save_notification_settings(
    State(ctx): State<Arc<AppContext>>,
    Json(settings): Json<NotificationSettings>,
) -> Json<Value> {
    match ctx.reminders.save_notification_settings(settings).await {
        Ok(settings) => success_with("settings", settings),
        Err(err) => failure(&err),
    }
}

/// Attempt an immediate delivery through the notification sink.
pub async fn trigger_test_notification(
    State(ctx): State<Arc<AppContext>>,
    Json(input): Json<TestNotification>,
) -> Json<Value> {
    match ctx.reminders.test_notification(&input.title, &input.message).await {
        Ok(()) => success(),
        Err(err) => failure(&err),
    }
}
