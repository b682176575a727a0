//! Input validation helpers
//!
//! Field checks live in the handlers; the shared rules (required-field
//! trimming, calendar dates, photo size cap) live here.

use chrono::NaiveDate;

/// Upper bound for a stored photo string (URL or inline-encoded image).
pub const MAX_PHOTO_BYTES: usize = 2 * 1024 * 1024;

/// Trim a required field, recording its name when absent or empty.
pub fn require_field(
    value: Option<&str>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => {
            missing.push(name);
            String::new()
        }
    }
}

/// Trim an optional field; absent and blank both become `None`.
pub fn optional_field(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Parse a calendar date in the canonical `YYYY-MM-DD` form.
///
/// Callers re-format the parsed date before storing, so non-padded input
/// like `2023-1-1` normalizes to `2023-01-01`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Canonical stored form of a calendar date.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Whether a photo string exceeds the storage cap.
pub fn photo_too_large(photo: Option<&str>) -> bool {
    photo.map(|p| p.len() > MAX_PHOTO_BYTES).unwrap_or(false)
}
