//! Goal endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::Local;
use serde_json::Value;
use tempo_domain::GoalDraft;

use super::DeleteById;
use crate::response::{failure, success, success_with};
use crate::AppContext;

/// All stored goals with their last recomputed progress.
pub async fn get_goals(State(ctx): State<Arc<AppContext>>) -> Json<Value> {
    success_with("goals", ctx.goals.list().await)
}

/// Create or update a goal.
pub async fn save_goal(
    State(ctx): State<Arc<AppContext>>,
    Json(draft): Json<GoalDraft>,
) -> Json<Value> {
    match ctx.goals.save(draft).await {
        Ok(goal) => success_with("goal", goal),
        Err(err) => failure(&err),
    }
}

/// Delete a goal by id; succeeds whether or not it exists.
pub async fn delete_goal(
    State(ctx): State<Arc<AppContext>>,
    Json(input): Json<DeleteById>,
) -> Json<Value> {
    match ctx.goals.delete(&input.id).await {
        Ok(()) => success(),
        Err(err) => failure(&err),
    }
}

/// Recompute and persist progress for every goal against the ledger.
pub async fn update_goal_progress(State(ctx): State<Arc<AppContext>>) -> Json<Value> {
    match ctx.goals.update_progress(Local::now().naive_local()).await {
        Ok(goals) => success_with("goals", goals),
        Err(err) => failure(&err),
    }
}
