//! Calendar-date formatting.
//!
//! The form works at day granularity. Dates travel as `YYYY-MM-DD` in query
//! parameters and HTML date inputs; the pickers show `DD / MM / YYYY` with a
//! fixed `00:00` time placeholder.

use chrono::NaiveDate;

/// Format a date as `YYYY-MM-DD`, or the empty string for no date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use trip_server::domain::format_iso_date;
///
/// let date = NaiveDate::from_ymd_opt(2025, 6, 5);
/// assert_eq!(format_iso_date(date), "2025-06-05");
/// assert_eq!(format_iso_date(None), "");
/// ```
pub fn format_iso_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Format a date the way the date pickers show a selection.
///
/// Returns `None` when nothing is selected so the caller can show its
/// placeholder instead.
pub fn format_picker_date(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| format!("{}   00:00", d.format("%d / %m / %Y")))
}

/// Parse a `YYYY-MM-DD` date as submitted by a date input.
///
/// Blank or malformed input yields `None`, which the form treats as
/// "no date picked".
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
