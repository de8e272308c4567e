//! Monetary totals and the most expensive row.

use crate::error::{AnalyzerError, Result};
use crate::models::Row;

/// Round to 2 decimals, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sum of `price` over all rows, rounded to 2 decimals.
pub fn total_sales(rows: &[Row]) -> f64 {
    round2(rows.iter().map(|row| row.price).sum())
}

/// Sum of `fee` over all rows, rounded to 2 decimals.
pub fn total_fees(rows: &[Row]) -> f64 {
    round2(rows.iter().map(|row| row.fee).sum())
}

/// The row with the highest `price`; the first one wins ties.
pub fn most_expensive_item(rows: &[Row]) -> Result<&Row> {
    let (first, rest) = rows.split_first().ok_or(AnalyzerError::EmptyDataset)?;
    Ok(rest
        .iter()
        .fold(first, |best, row| if row.price > best.price { row } else { best }))
}
