//! Date normalization between raw export timestamps and ISO-8601 UTC.
//!
//! Raw rows carry wall-clock strings written in the source time zone.
//! [`reformat_dates`] converts them to UTC once; every other operation in the
//! crate reads only the normalized form via [`parse_utc`].

use chrono::{
    DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
};
use chrono_tz::Tz;

use crate::config;
use crate::error::{AnalyzerError, Result};
use crate::models::Row;

// ---------------------------------------------------------------------------
// Raw (source time zone) timestamps
// ---------------------------------------------------------------------------

/// Parse a raw wall-clock string using the accepted local layouts.
pub fn parse_naive_local(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    config::LOCAL_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            config::LOCAL_DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

/// Parse a raw wall-clock string written in `tz` and convert it to UTC.
///
/// Ambiguous local times (DST fall-back) resolve to the earlier instant.
/// Local times skipped by a spring-forward transition are moved one hour ahead.
pub fn parse_local(value: &str, tz: Tz) -> Option<DateTime<Utc>> {
    let naive = parse_naive_local(value)?;
    let local = match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => tz
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()?,
    };
    Some(local.with_timezone(&Utc))
}

// ---------------------------------------------------------------------------
// Normalized (UTC) timestamps
// ---------------------------------------------------------------------------

/// Parse a normalized timestamp: RFC 3339 or a date-only `YYYY-MM-DD` (UTC midnight).
pub fn parse_utc(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, config::ISO_DATE_FORMAT)
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

/// Parse the normalized date of the row at `index`, tagging failures with its position.
pub(crate) fn row_timestamp(index: usize, row: &Row) -> Result<DateTime<Utc>> {
    parse_utc(&row.date).ok_or_else(|| AnalyzerError::InvalidDate {
        index,
        value: row.date.clone(),
    })
}

/// Render a UTC instant as `YYYY-MM-DDTHH:MM:SS.sssZ`.
pub fn to_iso_string(dt: &DateTime<Utc>) -> String {
    dt.format(config::ISO_UTC_FORMAT).to_string()
}

// ---------------------------------------------------------------------------
// Row transforms
// ---------------------------------------------------------------------------

/// Return a copy of `rows` with every raw `date` rewritten as ISO-8601 UTC.
///
/// Rows whose date cannot be parsed keep their original string; operations
/// that later read it fail with [`AnalyzerError::InvalidDate`].
pub fn reformat_dates(rows: &[Row], tz: Tz) -> Vec<Row> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| match parse_local(&row.date, tz) {
            Some(dt) => row.with_date(to_iso_string(&dt)),
            None => {
                tracing::warn!(index, date = %row.date, "unparsable order date left as-is");
                row.clone()
            }
        })
        .collect()
}

/// Format a calendar date as `"<day> <Month> <year>"`, e.g. `5 March 2024`.
pub fn format_date<D: Datelike>(date: &D) -> String {
    let month = config::MONTH_NAMES[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year())
}
