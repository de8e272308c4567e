//! Day-based scalar aggregates over normalized rows.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::dates::row_timestamp;
use crate::error::{AnalyzerError, Result};
use crate::models::Row;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Whole days (floored) between the last row's date and `now`.
///
/// Rows are expected newest-first, so the last row is the oldest order.
pub fn last_item_day_difference(rows: &[Row], now: DateTime<Utc>) -> Result<i64> {
    let index = rows.len().checked_sub(1).ok_or(AnalyzerError::EmptyDataset)?;
    let oldest = row_timestamp(index, &rows[index])?;
    Ok((now - oldest).num_milliseconds().div_euclid(MILLIS_PER_DAY))
}

/// Number of distinct UTC calendar days among the rows.
pub fn count_different_days(rows: &[Row]) -> Result<usize> {
    let mut days = HashSet::new();
    for (index, row) in rows.iter().enumerate() {
        days.insert(row_timestamp(index, row)?.date_naive());
    }
    Ok(days.len())
}
