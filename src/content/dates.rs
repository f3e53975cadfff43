//! Month-granularity dates used by the experience and education timelines

use super::ContentError;
use chrono::{Datelike, NaiveDate};

/// Parse `YYYY-MM` (a full `YYYY-MM-DD` is accepted too)
pub fn parse_month(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d"))
        .ok()
}

pub(super) fn check(field: &'static str, value: &str) -> Result<(), ContentError> {
    parse_month(value)
        .map(|_| ())
        .ok_or_else(|| ContentError::InvalidDate {
            field,
            value: value.to_string(),
        })
}

/// "January 2025"; unparseable input is returned as-is
pub fn format_month(value: &str) -> String {
    parse_month(value)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// "January 2025 - April 2025", or "... - Present" for an open range
pub fn format_range(start: &str, end: Option<&str>, open_label: &str) -> String {
    let end = end.map(format_month).unwrap_or_else(|| open_label.to_string());
    format!("{} - {}", format_month(start), end)
}

/// Whole months between two dates, ignoring days
fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32)
}

fn plural(n: i32, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// "3 months", "1 year", "2 years 4 months". Open ranges run until `today`.
pub fn duration_label(start: &str, end: Option<&str>, today: NaiveDate) -> Option<String> {
    let start = parse_month(start)?;
    let end = match end {
        Some(end) => parse_month(end)?,
        None => today,
    };
    let months = months_between(start, end).max(0);
    let (years, rest) = (months / 12, months % 12);

    Some(match (years, rest) {
        (0, m) => plural(m, "month"),
        (y, 0) => plural(y, "year"),
        (y, m) => format!("{} {}", plural(y, "year"), plural(m, "month")),
    })
}
