use crate::models::StudentRecord;

/// Header of the column holding the lookup key.
pub const ROLL_NUMBER_FIELD: &str = "rollNumber";

/// First record, in sheet order, whose trimmed roll number equals the
/// trimmed query. An empty query matches nothing.
pub fn find_student<'a>(
    records: &'a [StudentRecord],
    roll_number: &str,
) -> Option<&'a StudentRecord> {
    let wanted = roll_number.trim();
    if wanted.is_empty() {
        return None;
    }

    records
        .iter()
        .find(|record| record.get_or(ROLL_NUMBER_FIELD, "").trim() == wanted)
}
