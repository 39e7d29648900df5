//! Google Sheets values API client.
//!
//! Reads one A1 range per call with an API key and returns the raw grid of
//! cells. Nothing is cached or retried.

use crate::config::SheetsSettings;
use crate::models::RawGrid;
use reqwest::{Client, StatusCode, Url};
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum SheetsError {
    #[error("Sheets API request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Sheets API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to decode Sheets API response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Invalid Sheets API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Body of `GET /v4/spreadsheets/{id}/values/{range}`. Google omits
/// `values` entirely for an empty range.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValueRange {
    #[serde(default)]
    values: Option<Vec<Vec<Value>>>,
}

impl ValueRange {
    fn into_grid(self) -> RawGrid {
        self.values
            .unwrap_or_default()
            .into_iter()
            .map(|row| row.into_iter().map(cell_text).collect())
            .collect()
    }
}

fn cell_text(cell: Value) -> String {
    match cell {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// `{base}/v4/spreadsheets/{id}/values/{range}`, with the id and range
/// percent-encoded as single path segments.
fn values_url(settings: &SheetsSettings) -> Result<Url, SheetsError> {
    let invalid = |reason: String| SheetsError::InvalidBaseUrl {
        url: settings.api_base_url.clone(),
        reason,
    };

    let mut url = Url::parse(&settings.api_base_url).map_err(|e| invalid(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| invalid("cannot be a base".to_string()))?
        .pop_if_empty()
        .extend([
            "v4",
            "spreadsheets",
            settings.spreadsheet_id.as_str(),
            "values",
            settings.range.as_str(),
        ]);

    Ok(url)
}

#[derive(Clone)]
pub struct SheetsClient {
    client: Client,
    values_url: Url,
    settings: SheetsSettings,
}

impl SheetsClient {
    pub fn new(settings: SheetsSettings) -> Result<Self, SheetsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .map_err(SheetsError::Transport)?;
        let values_url = values_url(&settings)?;

        Ok(Self {
            client,
            values_url,
            settings,
        })
    }

    pub fn spreadsheet_id(&self) -> &str {
        &self.settings.spreadsheet_id
    }

    /// Fetch the configured range. The API key travels as the `key` query
    /// parameter and is stripped from transport errors before they surface.
    pub async fn fetch_grid(&self) -> Result<RawGrid, SheetsError> {
        tracing::debug!(
            spreadsheet_id = %self.settings.spreadsheet_id,
            range = %self.settings.range,
            "Fetching sheet values"
        );

        let response = self
            .client
            .get(self.values_url.clone())
            .query(&[("key", self.settings.api_key.expose_secret())])
            .send()
            .await
            .map_err(|e| SheetsError::Transport(e.without_url()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SheetsError::Transport(e.without_url()))?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                spreadsheet_id = %self.settings.spreadsheet_id,
                "Sheets API request rejected"
            );
            return Err(SheetsError::Status { status, body });
        }

        let value_range: ValueRange = serde_json::from_str(&body).map_err(SheetsError::Decode)?;
        Ok(value_range.into_grid())
    }
}
