use exam_results_service::config::Settings;
use exam_results_service::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "exam-results-service",
        &settings.telemetry.log_level,
        settings.telemetry.otlp_endpoint.as_deref(),
    );

    tracing::info!(
        environment = ?settings.environment,
        allowed_origins = ?settings.cors.allowed_origins,
        range = %settings.sheets.range,
        "Starting exam-results-service"
    );

    let application = Application::build(settings).await?;
    application.run_until_stopped().await?;

    Ok(())
}
