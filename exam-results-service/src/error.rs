use crate::config::Environment;
use crate::models::ExamResultsResponse;
use crate::services::SheetsError;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service_core::error::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("Roll number is required")]
    MissingRollNumber,

    #[error(transparent)]
    Upstream(#[from] SheetsError),

    #[error("sheet returned {rows} row(s); a header row and at least one data row are required")]
    NoData { rows: usize },

    #[error("Student not found")]
    NotFound,
}

impl ResultsError {
    /// Label for the `exam_results_lookups_total` counter.
    pub fn outcome(&self) -> &'static str {
        match self {
            ResultsError::MissingRollNumber => "invalid",
            ResultsError::Upstream(_) => "upstream_error",
            ResultsError::NoData { .. } => "no_data",
            ResultsError::NotFound => "not_found",
        }
    }

    /// Render the error for the caller. A missing student is a successful
    /// request with an error body, not an HTTP error.
    pub fn into_response(self, environment: Environment) -> Response {
        let expose = environment.exposes_error_details();

        match self {
            ResultsError::NotFound => Json(ExamResultsResponse::not_found()).into_response(),
            error @ ResultsError::MissingRollNumber => {
                AppError::BadRequest(error.to_string()).into_response()
            }
            ResultsError::Upstream(error) => {
                AppError::internal("Unable to fetch exam results", error)
                    .exposing_details(expose)
                    .into_response()
            }
            error @ ResultsError::NoData { .. } => {
                AppError::internal("No data found in the Google Sheet", error)
                    .exposing_details(expose)
                    .into_response()
            }
        }
    }
}
