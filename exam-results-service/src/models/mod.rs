pub mod report;
pub mod student;

pub use report::{ExamResultsResponse, FormattedStudent, Grade, SubjectEntry, Verdict};
pub use student::{RawGrid, StudentRecord};
