//! Reshape a matched student row into the results payload.
//!
//! Rows carry up to [`MAX_SUBJECTS`] numbered column groups:
//! `subject{i}`, `marks{i}` and an optional `maxMarks{i}`. Numeric cells are
//! parsed leniently; bad input degrades to a default instead of failing.

use crate::models::{FormattedStudent, Grade, StudentRecord, SubjectEntry, Verdict};

pub const MAX_SUBJECTS: usize = 5;

const DEFAULT_MAX_MARKS: i64 = 100;
const PASS_PERCENTAGE: f64 = 33.0;

/// Parse the integer prefix of `text`: leading whitespace, an optional sign,
/// then as many ASCII digits as present (`"45.5"` → 45, `"12abc"` → 12).
/// Returns `default` when no digits lead the text or the value overflows.
pub fn parse_int_or(text: &str, default: i64) -> i64 {
    let trimmed = text.trim_start();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    match unsigned[..end].parse::<i64>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) => default,
    }
}

/// Share of `max` scored, in percent. A non-positive `max` scores 0.
fn percent_of(obtained: i64, max: i64) -> f64 {
    if max <= 0 {
        return 0.0;
    }
    obtained as f64 * 100.0 / max as f64
}

/// Render `numerator / denominator` with `decimals` fraction digits, rounding
/// ties away from zero. Exact for any integer ratio; `denominator` must be
/// positive.
fn to_fixed(numerator: i128, denominator: i128, decimals: u32) -> String {
    let scale = 10_i128.pow(decimals);
    let scaled = numerator.abs() * scale;
    let mut rounded = scaled / denominator;
    if 2 * (scaled % denominator) >= denominator {
        rounded += 1;
    }

    let sign = if numerator < 0 { "-" } else { "" };
    let whole = rounded / scale;
    if decimals == 0 {
        return format!("{sign}{whole}");
    }
    let fraction = rounded % scale;
    format!("{sign}{whole}.{fraction:0width$}", width = decimals as usize)
}

fn subject_at(record: &StudentRecord, index: usize) -> Option<SubjectEntry> {
    let name = record.get(&format!("subject{index}"))?;
    let marks = record.get(&format!("marks{index}"))?;

    let obtained = parse_int_or(marks, 0);
    let max_marks = record
        .get(&format!("maxMarks{index}"))
        .map_or(DEFAULT_MAX_MARKS, |max| parse_int_or(max, DEFAULT_MAX_MARKS));

    Some(SubjectEntry {
        name: name.to_string(),
        max_marks,
        obtained,
        grade: Grade::from_percentage(percent_of(obtained, max_marks)),
    })
}

pub fn format_student(record: &StudentRecord, default_school: &str) -> FormattedStudent {
    let subjects: Vec<SubjectEntry> = (1..=MAX_SUBJECTS)
        .filter_map(|index| subject_at(record, index))
        .collect();

    let total_obtained = subjects
        .iter()
        .fold(0_i64, |total, subject| total.saturating_add(subject.obtained));
    let total_marks = subjects
        .iter()
        .fold(0_i64, |total, subject| total.saturating_add(subject.max_marks));

    let mut student = FormattedStudent {
        name: record.get_or("name", "").to_string(),
        class: record.get_or("class", "").to_string(),
        school: record.get_or("school", default_school).to_string(),
        subjects,
        total_obtained,
        total_marks,
        percentage: "0".to_string(),
        cgpa: "0".to_string(),
        result: Verdict::Fail,
    };

    if total_marks > 0 {
        let obtained = i128::from(total_obtained);
        let marks = i128::from(total_marks);
        student.percentage = to_fixed(obtained * 100, marks, 2);
        // percentage / 9.5 == obtained * 200 / (marks * 19)
        student.cgpa = to_fixed(obtained * 200, marks * 19, 1);

        // Pass/fail is judged on the figure the student sees.
        let displayed: f64 = student
            .percentage
            .parse()
            .unwrap_or_else(|_| percent_of(total_obtained, total_marks));
        if displayed >= PASS_PERCENTAGE {
            student.result = Verdict::Pass;
        }
    }

    student
}
