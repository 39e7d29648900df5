//! The lookup pipeline behind `/api/exam-results`:
//! fetch → normalize → resolve → format.

use crate::config::ResultsSettings;
use crate::error::ResultsError;
use crate::models::FormattedStudent;
use crate::services::formatter::format_student;
use crate::services::normalizer::normalize;
use crate::services::resolver::find_student;
use crate::services::SheetsClient;

#[derive(Clone)]
pub struct ExamResultsService {
    sheets: SheetsClient,
    default_school: String,
}

impl ExamResultsService {
    pub fn new(sheets: SheetsClient, settings: &ResultsSettings) -> Self {
        Self {
            sheets,
            default_school: settings.default_school.clone(),
        }
    }

    /// Look up one student by roll number. Every call re-reads the sheet.
    pub async fn lookup(&self, roll_number: Option<&str>) -> Result<FormattedStudent, ResultsError> {
        let roll_number = roll_number
            .map(str::trim)
            .filter(|roll| !roll.is_empty())
            .ok_or(ResultsError::MissingRollNumber)?;

        let grid = self.sheets.fetch_grid().await?;
        tracing::info!(
            spreadsheet_id = %self.sheets.spreadsheet_id(),
            rows = grid.len(),
            "Fetched sheet values"
        );

        let records = normalize(&grid)?;
        let record = find_student(&records, roll_number).ok_or(ResultsError::NotFound)?;

        Ok(format_student(record, &self.default_school))
    }
}
