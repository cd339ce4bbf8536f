//! Permissive date parsing and report-style formatting.
//!
//! Case data arrives with human-entered dates in whatever shape the source
//! system produced. Parsing tries a fixed battery of formats; ambiguous
//! all-numeric dates are read month-first, falling back to day-first when
//! the month position is out of range.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d/%m/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%m-%d-%Y",
    "%d-%m-%Y",
    "%d-%b-%Y",
    "%d %b %Y",
    "%d-%B-%Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%B %d %Y",
];

/// Formats a date-like string as `DD-MMM-YYYY` with an upper-cased month
/// abbreviation, e.g. `05-JUN-2023`.
///
/// Returns `None` when no accepted format matches; each caller substitutes
/// its own field's failure sentinel.
pub fn format_report_date(raw: &str) -> Option<String> {
    parse_permissive(raw).map(|date| date.format("%d-%b-%Y").to_string().to_uppercase())
}

fn parse_permissive(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.date_naive());
    }
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed.date());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }
    None
}
