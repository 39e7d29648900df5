pub mod exam_results;
pub mod formatter;
pub mod metrics;
pub mod normalizer;
pub mod resolver;
pub mod sheets;

pub use exam_results::ExamResultsService;
pub use sheets::{SheetsClient, SheetsError};
