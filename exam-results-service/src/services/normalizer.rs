use crate::error::ResultsError;
use crate::models::StudentRecord;

/// Turn a raw grid into one record per data row, keyed by the header row.
/// Sheet order is preserved. Fails when there is no data row.
pub fn normalize(grid: &[Vec<String>]) -> Result<Vec<StudentRecord>, ResultsError> {
    match grid.split_first() {
        Some((headers, rows)) if !rows.is_empty() => Ok(rows
            .iter()
            .map(|row| StudentRecord::from_row(headers, row))
            .collect()),
        _ => Err(ResultsError::NoData { rows: grid.len() }),
    }
}
