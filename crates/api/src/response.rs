//! JSON response envelope shared by every endpoint.

use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use tempo_domain::TempoError;

/// `{"status": "success"}`
pub fn success() -> Json<Value> {
    Json(json!({ "status": "success" }))
}

/// `{"status": "success", "<key>": <value>}`
pub fn success_with(key: &str, value: impl Serialize) -> Json<Value> {
    Json(json!({ "status": "success", key: value }))
}

/// `{"status": "error", "message": <message>}`
pub fn failure(err: &TempoError) -> Json<Value> {
    Json(json!({ "status": "error", "message": message(err) }))
}

/// The user-facing message without the error-kind prefix `Display` adds.
fn message(err: &TempoError) -> &str {
    match err {
        TempoError::Storage(m)
        | TempoError::Corrupt(m)
        | TempoError::Config(m)
        | TempoError::NotFound(m)
        | TempoError::InvalidInput(m)
        | TempoError::Notification(m)
        | TempoError::Report(m)
        | TempoError::Internal(m) => m,
    }
}
