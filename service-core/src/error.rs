use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A server-side failure with a caller-facing message. The underlying
    /// error is only rendered into the body when `expose_details` is set.
    #[error("{message}: {error}")]
    Internal {
        message: String,
        error: anyhow::Error,
        expose_details: bool,
    },

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl AppError {
    pub fn internal(message: impl Into<String>, error: impl Into<anyhow::Error>) -> Self {
        AppError::Internal {
            message: message.into(),
            error: error.into(),
            expose_details: false,
        }
    }

    /// Toggle whether the underlying error text is sent to the caller.
    /// Has no effect on variants that never carry details.
    pub fn exposing_details(self, expose: bool) -> Self {
        match self {
            AppError::Internal { message, error, .. } => AppError::Internal {
                message,
                error,
                expose_details: expose,
            },
            other => other,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } | AppError::InternalError(_) | AppError::ConfigError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

/// JSON envelope shared by every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
            details: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            AppError::BadRequest(message) => ErrorResponse::new(message),
            AppError::Internal {
                message,
                error,
                expose_details,
            } => ErrorResponse {
                details: expose_details.then(|| format!("{:#}", error)),
                ..ErrorResponse::new(message)
            },
            AppError::InternalError(_) => ErrorResponse::new("Internal server error"),
            AppError::ConfigError(_) => ErrorResponse::new("Configuration error"),
        };

        (status, Json(body)).into_response()
    }
}
