//! Activity ledger endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::{Form, Json};
use serde_json::{json, Value};
use tempo_domain::constants::LEDGER_DATE_FORMAT;
use tempo_domain::{ActivityEntry, EntryUpdate, NewEntry};
use tracing::info;

use super::DeleteById;
use crate::response::{failure, success, success_with};
use crate::AppContext;

fn entry_view(index: usize, entry: &ActivityEntry) -> Value {
    json!({
        "index": index,
        "id": entry.id,
        "date": entry.date.format(LEDGER_DATE_FORMAT).to_string(),
        "activity": entry.activity,
        "minutes": entry.minutes,
        "category": entry.category,
    })
}

/// All ledger entries, with position exposed only as a derived view.
pub async fn get_all_data(State(ctx): State<Arc<AppContext>>) -> Json<Value> {
    let entries = ctx.ledger.entries().await;
    let data: Vec<Value> =
        entries.iter().enumerate().map(|(index, entry)| entry_view(index, entry)).collect();
    success_with("entries", data)
}

/// Append a form-submitted entry after validation.
pub async fn add_entry(
    State(ctx): State<Arc<AppContext>>,
    Form(input): Form<NewEntry>,
) -> Json<Value> {
    match ctx.ledger.add_entry(&input).await {
        Ok(entry) => {
            info!(id = %entry.id, "entry added");
            success_with("entry", entry)
        }
        Err(err) => failure(&err),
    }
}

/// Update the entry addressed by id.
pub async fn update_entry(
    State(ctx): State<Arc<AppContext>>,
    Json(input): Json<EntryUpdate>,
) -> Json<Value> {
    match ctx.ledger.update_entry(&input).await {
        Ok(entry) => success_with("entry", entry),
        Err(err) => failure(&err),
    }
}

/// Delete the entry addressed by id.
pub async fn delete_entry(
    State(ctx): State<Arc<AppContext>>,
    Json(input): Json<DeleteById>,
) -> Json<Value> {
    match ctx.ledger.delete_entry(&input.id).await {
        Ok(()) => success(),
        Err(err) => failure(&err),
    }
}

/// Totals, category breakdown, and daily trend, recomputed per request.
pub async fn get_summary(State(ctx): State<Arc<AppContext>>) -> Json<Value> {
    success_with("summary", ctx.ledger.summary().await)
}
