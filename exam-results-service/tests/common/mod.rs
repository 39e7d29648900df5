use exam_results_service::config::{
    CorsSettings, Environment, ResultsSettings, Settings, SheetsSettings, TelemetrySettings,
};
use exam_results_service::Application;
use secrecy::Secret;
use serde_json::{json, Value};
use service_core::config::ServerConfig;
use wiremock::matchers::{method, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_SPREADSHEET_ID: &str = "test-sheet";
pub const TEST_API_KEY: &str = "test-api-key";

pub struct TestApp {
    pub address: String,
    pub sheets: MockServer,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(Environment::Production, None).await
    }

    /// Spawn on a random port with the Sheets API replaced by a mock server,
    /// unless `api_base_url` points the client somewhere else.
    pub async fn spawn_with(environment: Environment, api_base_url: Option<String>) -> Self {
        let sheets = MockServer::start().await;

        let settings = Settings {
            environment,
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            sheets: SheetsSettings {
                spreadsheet_id: TEST_SPREADSHEET_ID.to_string(),
                api_key: Secret::new(TEST_API_KEY.to_string()),
                range: "Sheet1!A1:Z100".to_string(),
                api_base_url: api_base_url.unwrap_or_else(|| sheets.uri()),
                timeout_seconds: 5,
            },
            results: ResultsSettings::default(),
            cors: CorsSettings::default(),
            telemetry: TelemetrySettings::default(),
        };

        let app = Application::build(settings)
            .await
            .expect("Failed to build test application");
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address,
            sheets,
            client: reqwest::Client::new(),
        }
    }

    /// Serve `values` as the sheet contents.
    pub async fn mock_sheet(&self, values: Value) {
        self.mock_sheet_response(
            ResponseTemplate::new(200).set_body_json(json!({
                "range": "Sheet1!A1:Z100",
                "majorDimension": "ROWS",
                "values": values
            })),
        )
        .await;
    }

    pub async fn mock_sheet_response(&self, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path_regex(format!(
                r"^/v4/spreadsheets/{}/values/",
                TEST_SPREADSHEET_ID
            )))
            .and(query_param("key", TEST_API_KEY))
            .respond_with(response)
            .mount(&self.sheets)
            .await;
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

/// The single-student sheet used across scenarios.
pub fn asha_sheet() -> Value {
    json!([
        ["rollNumber", "name", "subject1", "marks1", "maxMarks1"],
        ["101", "Asha", "Math", "45", "50"]
    ])
}
