//! Gap-filled time series of sales and item counts, and the daily peaks
//! derived from them.

use std::collections::BTreeMap;

use chrono::{Datelike, Months, NaiveDate};

use crate::dates::row_timestamp;
use crate::error::{AnalyzerError, Result};
use crate::models::{BucketSeries, DailyItems, DailySales, Granularity, Row};
use crate::stats::totals::round2;

#[derive(Debug, Default, Clone, Copy)]
struct Accumulator {
    price_sum: f64,
    item_count: usize,
}

/// Truncate a date to the first day of its bucket.
fn bucket_start(date: NaiveDate, granularity: Granularity) -> NaiveDate {
    match granularity {
        Granularity::Daily => date,
        Granularity::Monthly => date.with_day(1).unwrap_or(date),
        Granularity::Yearly => date.with_ordinal(1).unwrap_or(date),
    }
}

fn next_bucket(start: NaiveDate, granularity: Granularity) -> Option<NaiveDate> {
    match granularity {
        Granularity::Daily => start.succ_opt(),
        Granularity::Monthly => start.checked_add_months(Months::new(1)),
        Granularity::Yearly => start.checked_add_months(Months::new(12)),
    }
}

fn bucket_key(start: NaiveDate, granularity: Granularity) -> String {
    let fmt = match granularity {
        Granularity::Daily => "%Y-%m-%d",
        Granularity::Monthly => "%Y-%m",
        Granularity::Yearly => "%Y",
    };
    start.format(fmt).to_string()
}

/// Aggregate price sums and item counts per day, month or year.
///
/// The returned series covers every bucket from the oldest to the newest row,
/// inclusive, regardless of row order. Buckets without rows are emitted with
/// zero sales and zero items. Price sums are rounded per bucket after summing.
pub fn price_sum_and_item_count(rows: &[Row], granularity: Granularity) -> Result<BucketSeries> {
    let mut buckets: BTreeMap<NaiveDate, Accumulator> = BTreeMap::new();
    for (index, row) in rows.iter().enumerate() {
        let date = row_timestamp(index, row)?.date_naive();
        let acc = buckets.entry(bucket_start(date, granularity)).or_default();
        acc.price_sum += row.price;
        acc.item_count += 1;
    }

    let mut series = BucketSeries::default();
    let (Some((&first, _)), Some((&last, _))) =
        (buckets.first_key_value(), buckets.last_key_value())
    else {
        return Ok(series);
    };

    tracing::debug!(
        %granularity,
        from = %first,
        to = %last,
        observed = buckets.len(),
        "building bucket series"
    );

    let mut current = Some(first);
    while let Some(start) = current.filter(|start| *start <= last) {
        let acc = buckets.get(&start).copied().unwrap_or_default();
        series.push(
            bucket_key(start, granularity),
            round2(acc.price_sum),
            acc.item_count,
        );
        current = next_bucket(start, granularity);
    }

    Ok(series)
}

/// The day with the highest sales total; the earliest day wins ties.
pub fn most_sales_in_one_day(rows: &[Row]) -> Result<DailySales> {
    let daily = price_sum_and_item_count(rows, Granularity::Daily)?;
    let best = daily
        .iter()
        .reduce(|best, bucket| if bucket.price_sum > best.price_sum { bucket } else { best })
        .ok_or(AnalyzerError::EmptyDataset)?;
    Ok(DailySales {
        sales: best.price_sum,
        date: best.key.to_string(),
    })
}

/// The day with the most rows; the earliest day wins ties.
pub fn most_items_sold_in_one_day(rows: &[Row]) -> Result<DailyItems> {
    let daily = price_sum_and_item_count(rows, Granularity::Daily)?;
    let best = daily
        .iter()
        .reduce(|best, bucket| if bucket.item_count > best.item_count { bucket } else { best })
        .ok_or(AnalyzerError::EmptyDataset)?;
    Ok(DailyItems {
        items: best.item_count,
        date: best.key.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn bucket_start_truncates() {
        let date = ymd(2024, 7, 19);
        assert_eq!(bucket_start(date, Granularity::Daily), date);
        assert_eq!(bucket_start(date, Granularity::Monthly), ymd(2024, 7, 1));
        assert_eq!(bucket_start(date, Granularity::Yearly), ymd(2024, 1, 1));
    }

    #[test]
    fn month_step_crosses_year() {
        let next = next_bucket(ymd(2023, 12, 1), Granularity::Monthly).unwrap();
        assert_eq!(bucket_key(next, Granularity::Monthly), "2024-01");
    }

    #[test]
    fn day_step_handles_leap_day() {
        let next = next_bucket(ymd(2024, 2, 28), Granularity::Daily).unwrap();
        assert_eq!(bucket_key(next, Granularity::Daily), "2024-02-29");
    }
}
