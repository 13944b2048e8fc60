use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Format sent to the listing endpoint for date filters.
pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";
/// Medium date-time, e.g. `Oct 19, 2026, 9:30 PM`.
pub const DISPLAY_FORMAT: &str = "%b %-d, %Y, %-I:%M %p";

/// `yyyy-MM-dd`, or an empty string for an unbounded end.
pub fn query_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(QUERY_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Parses the value of an `<input type="date">`.
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), QUERY_DATE_FORMAT).ok()
}

/// Formats an ISO timestamp in the browser's time zone.
pub fn format_timestamp(iso: &str) -> Option<String> {
    format_timestamp_in(iso, &Local)
}

/// Timestamps with an offset are converted to `tz`; naive ones are shown
/// as they are.
pub fn format_timestamp_in<Tz>(iso: &str, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let iso = iso.trim();
    if iso.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(iso) {
        return Some(parsed.with_timezone(tz).format(DISPLAY_FORMAT).to_string());
    }

    NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(iso, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.format(DISPLAY_FORMAT).to_string())
}
