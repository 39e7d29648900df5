//! Application startup and lifecycle management.

use crate::config::Settings;
use crate::handlers;
use crate::services::{ExamResultsService, SheetsClient};
use axum::{middleware::from_fn, routing::get, Router};
use service_core::error::AppError;
use service_core::middleware::{
    cors::read_only_cors,
    metrics::metrics_middleware,
    tracing::{http_trace_layer, request_id_middleware},
};
use service_core::observability::init_metrics;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

/// Shared application state. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub results: ExamResultsService,
}

impl AppState {
    pub fn new(settings: Settings) -> Result<Self, AppError> {
        let sheets = SheetsClient::new(settings.sheets.clone()).map_err(|e| {
            tracing::error!("Failed to build Sheets API client: {}", e);
            AppError::InternalError(e.into())
        })?;
        let results = ExamResultsService::new(sheets, &settings.results);

        Ok(Self {
            settings: Arc::new(settings),
            results,
        })
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = read_only_cors(&state.settings.cors.allowed_origins);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/metrics", get(handlers::metrics))
        .route(
            "/api/exam-results",
            get(handlers::exam_results::get_exam_results),
        )
        .layer(from_fn(metrics_middleware))
        .layer(http_trace_layer())
        // Outermost so the trace span sees the request id.
        .layer(from_fn(request_id_middleware))
        .layer(cors)
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application and bind its listener. Port 0 picks a free port.
    pub async fn build(settings: Settings) -> Result<Self, AppError> {
        init_metrics();

        let address = settings.server.address();
        let state = AppState::new(settings)?;

        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            router: build_router(state),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        tracing::info!("Exam results proxy listening on port {}", self.port);

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
