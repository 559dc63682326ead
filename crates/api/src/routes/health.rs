//! Liveness endpoint

use axum::Json;
use serde_json::{json, Value};

/// Process liveness and version.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "success",
        "service": "tempo",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
