//! HTTP handlers for exam-results-service.

pub mod exam_results;
pub mod health;

use axum::{http::StatusCode, response::IntoResponse};
use service_core::observability::render_metrics;

/// Prometheus metrics endpoint.
pub async fn metrics() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        render_metrics(),
    )
}
