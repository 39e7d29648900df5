use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::{SecondsFormat, Utc};
use serde_json::json;

/// Liveness probe. Does not touch the spreadsheet.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "message": "Backend is operational",
            "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
        })),
    )
}
