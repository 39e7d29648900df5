//! Response payloads for `/api/exam-results`, in the JSON shape the results
//! frontend consumes.

use serde::{Deserialize, Serialize};

/// Letter grade for a single subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Inclusive lower bounds: 90 → A, 80 → B, 70 → C, 60 → D.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Grade::A
        } else if percentage >= 80.0 {
            Grade::B
        } else if percentage >= 70.0 {
            Grade::C
        } else if percentage >= 60.0 {
            Grade::D
        } else {
            Grade::F
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Pass,
    #[default]
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectEntry {
    pub name: String,
    pub max_marks: i64,
    pub obtained: i64,
    pub grade: Grade,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedStudent {
    pub name: String,
    pub class: String,
    pub school: String,
    pub subjects: Vec<SubjectEntry>,
    pub total_obtained: i64,
    pub total_marks: i64,
    /// Overall percentage with two decimals, or `"0"` when nothing was graded.
    pub percentage: String,
    /// Percentage divided by 9.5 with one decimal, or `"0"`.
    pub cgpa: String,
    pub result: Verdict,
}

/// Body of a `200` from `/api/exam-results`. A lookup miss is reported here as
/// `{"status":"error"}` rather than through an HTTP error status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ExamResultsResponse {
    Success { student: FormattedStudent },
    Error { message: String },
}

impl ExamResultsResponse {
    pub fn not_found() -> Self {
        ExamResultsResponse::Error {
            message: "Student not found".to_string(),
        }
    }
}
