use metrics::counter;

/// Count one `/api/exam-results` lookup by outcome
/// (`found`, `not_found`, `invalid`, `no_data`, `upstream_error`).
pub fn record_lookup(outcome: &'static str) {
    counter!("exam_results_lookups_total", "outcome" => outcome).increment(1);
}
