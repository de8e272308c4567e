//! One-shot report of every headline figure over a set of normalized rows.

use chrono::{DateTime, Utc};

use crate::error::{AnalyzerError, Result};
use crate::models::{Row, SalesSummary};
use crate::stats::{days, occurrences, series, totals};

/// Build a [`SalesSummary`] for non-empty, normalized, newest-first rows.
///
/// `top_items` keeps the `top_n` most frequent names plus a remainder entry
/// labelled `other_label`.
pub fn summarize(
    rows: &[Row],
    top_n: usize,
    other_label: &str,
    now: DateTime<Utc>,
) -> Result<SalesSummary> {
    if rows.is_empty() {
        return Err(AnalyzerError::EmptyDataset);
    }
    tracing::debug!(rows = rows.len(), top_n, "summarizing order rows");

    Ok(SalesSummary {
        row_count: rows.len(),
        total_sales: totals::total_sales(rows),
        total_fees: totals::total_fees(rows),
        distinct_days: days::count_different_days(rows)?,
        days_since_oldest: days::last_item_day_difference(rows, now)?,
        top_items: occurrences::count_item_occurrences_with_label(rows, Some(top_n), other_label),
        most_expensive_item: totals::most_expensive_item(rows)?.clone(),
        best_sales_day: series::most_sales_in_one_day(rows)?,
        best_items_day: series::most_items_sold_in_one_day(rows)?,
    })
}
