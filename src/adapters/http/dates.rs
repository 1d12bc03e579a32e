//! Date path and query parameters.

use chrono::NaiveDate;

/// Parses `today` or an ISO `YYYY-MM-DD` date.
pub fn parse_date_param(raw: &str, today: NaiveDate) -> Option<NaiveDate> {
    if raw.eq_ignore_ascii_case("today") {
        return Some(today);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
