use config::ConfigBuilder;
use config::builder::DefaultState;
use secrecy::Secret;
use serde::Deserialize;
use service_core::config::{configuration_directory, layered_builder, ServerConfig};
use service_core::error::AppError;
use std::env;

const SERVICE_DIR: &str = "exam-results-service";

/// Deployment mode. Only development responses carry error details.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[serde(alias = "dev")]
    Development,
    #[default]
    #[serde(alias = "prod")]
    Production,
}

impl Environment {
    pub fn exposes_error_details(self) -> bool {
        self == Environment::Development
    }

    /// Legacy `NODE_ENV` semantics: exactly `development` enables development
    /// mode, any other value means production.
    pub fn from_node_env(value: &str) -> Self {
        if value == "development" {
            Environment::Development
        } else {
            Environment::Production
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub environment: Environment,
    pub server: ServerConfig,
    pub sheets: SheetsSettings,
    #[serde(default)]
    pub results: ResultsSettings,
    #[serde(default)]
    pub cors: CorsSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SheetsSettings {
    pub spreadsheet_id: String,
    pub api_key: Secret<String>,
    /// A1 range read on every lookup.
    #[serde(default = "default_range")]
    pub range: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_range() -> String {
    "Sheet1!A1:Z100".to_string()
}

fn default_api_base_url() -> String {
    "https://sheets.googleapis.com".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResultsSettings {
    /// Used when a student row has no `school` column value.
    #[serde(default = "default_school")]
    pub default_school: String,
}

impl Default for ResultsSettings {
    fn default() -> Self {
        Self {
            default_school: default_school(),
        }
    }
}

fn default_school() -> String {
    "PM SHRI KENDRIYA VIDYALAYA RAEBARELI".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

fn default_allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySettings {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            otlp_endpoint: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Settings {
    /// Load settings once at start-up: defaults, optional `config/base.yaml`,
    /// `APP_*` variables, then the legacy variable names of existing
    /// deployments (`PORT`, `GOOGLE_SHEET_ID`, `GOOGLE_SHEETS_API_KEY`,
    /// `NODE_ENV`), which take precedence.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::load_with(|name| env::var(name).ok())
    }

    /// [`Settings::load`] with the legacy variables read through `var`.
    pub fn load_with(var: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let directory = configuration_directory(SERVICE_DIR)?;
        let environment =
            var("NODE_ENV").map(|value| Environment::from_node_env(&value).as_str());

        let builder = layered_builder(&directory, &["cors.allowed_origins"])
            .set_override_option("server.port", var("PORT"))?
            .set_override_option("sheets.spreadsheet_id", var("GOOGLE_SHEET_ID"))?
            .set_override_option("sheets.api_key", var("GOOGLE_SHEETS_API_KEY"))?
            .set_override_option("environment", environment)?;

        Self::from_builder(builder)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, AppError> {
        let settings = builder.set_default("server.port", 3000)?.build()?;
        Ok(settings.try_deserialize()?)
    }
}
