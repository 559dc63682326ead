//! Route handlers and router assembly.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;

use crate::AppContext;

pub mod goals;
pub mod health;
pub mod ledger;
pub mod reminders;
pub mod reports;
pub mod settings;
pub mod todos;

/// Delete payload shared by every id-addressed resource.
#[derive(Debug, Deserialize)]
pub struct DeleteById {
    pub id: String,
}

/// Assemble the full route table over the application context.
pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        // Activity ledger
        .route("/get_all_data", get(ledger::get_all_data))
        .route("/add_entry", post(ledger::add_entry))
        .route("/update_entry", post(ledger::update_entry))
        .route("/delete_entry", post(ledger::delete_entry))
        .route("/get_summary", get(ledger::get_summary))
        // Reminders
        .route("/get_reminders", get(reminders::get_reminders))
        .route("/save_reminder", post(reminders::save_reminder))
        .route("/delete_reminder", post(reminders::delete_reminder))
        // Motivation & notification settings
        .route("/get_motivation_settings", get(settings::get_motivation_settings))
        .route("/save_motivation_settings", post(settings::save_motivation_settings))
        .route("/get_notification_settings", get(settings::get_notification_settings))
        .route("/save_notification_settings", post(settings::save_notification_settings))
        .route("/trigger_test_notification", post(settings::trigger_test_notification))
        // Goals
        .route("/get_goals", get(goals::get_goals))
        .route("/save_goal", post(goals::save_goal))
        .route("/delete_goal", post(goals::delete_goal))
        .route("/update_goal_progress", post(goals::update_goal_progress))
        // To-dos
        .route("/get_todos", get(todos::get_todos))
        .route("/save_todo", post(todos::save_todo))
        .route("/delete_todo", post(todos::delete_todo))
        // Reports
        .route("/generate_report", post(reports::generate_report))
        .with_state(ctx)
}
