//! Report generation endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::response::{failure, success_with};
use crate::AppContext;

/// Body naming the report script to run.
#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub report: String,
}

/// Run the named report script and return its captured output.
pub async fn generate_report(
    State(ctx): State<Arc<AppContext>>,
    Json(input): Json<ReportRequest>,
) -> Json<Value> {
    match ctx.reports.generate(&input.report).await {
        Ok(output) => success_with("output", output),
        Err(err) => failure(&err),
    }
}
