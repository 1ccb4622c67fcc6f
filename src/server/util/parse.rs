use chrono::{DateTime, NaiveDate, Utc};

/// Parses a calendar date given as `YYYY-MM-DD` or as an RFC 3339 timestamp.
///
/// Plain dates are interpreted as midnight UTC.
///
/// # Returns
/// - `Some(DateTime<Utc>)` - Successfully parsed date
/// - `None` - Value matches neither format
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Checks that a value is a real calendar date written as `DD-MM-YYYY`.
pub fn is_day_month_year(value: &str) -> bool {
    value.len() == 10 && NaiveDate::parse_from_str(value, "%d-%m-%Y").is_ok()
}
