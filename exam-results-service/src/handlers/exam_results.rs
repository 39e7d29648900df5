use crate::error::ResultsError;
use crate::models::ExamResultsResponse;
use crate::services::metrics::record_lookup;
use crate::AppState;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ExamResultsQuery {
    #[serde(rename = "rollNumber")]
    pub roll_number: Option<String>,
}

/// `GET /api/exam-results?rollNumber=...`
pub async fn get_exam_results(
    State(state): State<AppState>,
    query: Option<Query<ExamResultsQuery>>,
) -> Response {
    let roll_number = query.and_then(|Query(query)| query.roll_number);

    tracing::info!(roll_number = ?roll_number, "Fetching exam results");

    match state.results.lookup(roll_number.as_deref()).await {
        Ok(student) => {
            record_lookup("found");
            tracing::info!(student = %student.name, "Student found");
            Json(ExamResultsResponse::Success { student }).into_response()
        }
        Err(error) => {
            record_lookup(error.outcome());
            if matches!(
                error,
                ResultsError::NotFound | ResultsError::MissingRollNumber
            ) {
                tracing::info!(roll_number = ?roll_number, error = %error, "Lookup rejected");
            } else {
                tracing::error!(error = %error, "Error fetching exam results");
            }
            error.into_response(state.settings.environment)
        }
    }
}
