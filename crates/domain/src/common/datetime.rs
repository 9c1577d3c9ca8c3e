//! DateTime parsing utilities with consistent error handling.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::error::DomainError;

/// Parses an RFC3339 timestamp string, returning an error if parsing fails.
///
/// # Examples
///
/// ```
/// use medidesk_domain::common::parse_datetime;
/// use chrono::Datelike;
///
/// let dt = parse_datetime("2024-01-15T10:30:00Z").unwrap();
/// assert_eq!(dt.year(), 2024);
/// ```
///
/// # Errors
///
/// Returns `chrono::ParseError` if the string is not valid RFC3339.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc))
}

/// Parses an RFC3339 timestamp string, falling back to provided default on error.
///
/// Remote rows occasionally carry timestamps without an offset; callers use
/// this with the current clock reading so a malformed value never aborts
/// a whole fetch.
pub fn parse_datetime_or(s: &str, default: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(default)
}

/// Composes a `YYYY-MM-DD` date and an `HH:MM` (or `HH:MM:SS`) time, read as
/// wall-clock time at `offset`, into a UTC instant.
///
/// # Examples
///
/// ```
/// use medidesk_domain::common::compose_local_datetime;
/// use chrono::{FixedOffset, Timelike};
///
/// let utc = FixedOffset::east_opt(0).unwrap();
/// let dt = compose_local_datetime("2025-03-01", "14:30", utc).unwrap();
/// assert_eq!(dt.hour(), 14);
/// assert_eq!(dt.minute(), 30);
/// ```
///
/// # Errors
///
/// Returns `DomainError::Parse` when either part is malformed.
pub fn compose_local_datetime(
    date: &str,
    time: &str,
    offset: FixedOffset,
) -> Result<DateTime<Utc>, DomainError> {
    let date = date.trim();
    let time = time.trim();

    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| DomainError::parse(format!("Invalid date '{}': {}", date, e)))?;
    let clock = NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .map_err(|e| DomainError::parse(format!("Invalid time '{}': {}", time, e)))?;

    offset
        .from_local_datetime(&NaiveDateTime::new(day, clock))
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| DomainError::parse(format!("Ambiguous local time {} {}", date, time)))
}

/// The calendar day `instant` falls on as seen from `offset`.
pub fn local_date(instant: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    instant.with_timezone(&offset).date_naive()
}
