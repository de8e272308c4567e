//! Descriptive statistics over e-commerce order rows.
//!
//! Computes totals, occurrence rankings, day spans, gap-filled time series and
//! daily peaks over an in-memory slice of [`Row`] values. Raw export dates are
//! normalized to ISO-8601 UTC once with [`Analyzer::reformat_dates`]; every
//! other operation reads that normalized form.
//!
//! # Quick start
//!
//! ```no_run
//! use sales_analyzer::{Analyzer, Granularity, Row};
//!
//! let analyzer = Analyzer::builder().build();
//! let raw: Vec<Row> = Vec::new(); // rows from the CSV ingestion layer
//!
//! let rows = analyzer.reformat_dates(&raw);
//! let monthly = analyzer.price_sum_and_item_count(&rows, Granularity::Monthly).unwrap();
//! let summary = analyzer.summarize(&rows, 5).unwrap();
//! ```

pub mod config;
pub mod dates;
pub mod error;
pub mod models;
pub mod stats;

pub use error::{AnalyzerError, Result};
pub use models::{
    Bucket, BucketSeries, DailyItems, DailySales, Granularity, ItemCount, Row, SalesSummary,
};

use std::fmt;

use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;

// ---------------------------------------------------------------------------
// AnalyzerBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`Analyzer`].
///
/// Use [`Analyzer::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](AnalyzerBuilder::build).
pub struct AnalyzerBuilder {
    source_timezone: Tz,
    other_label: String,
    fixed_now: Option<DateTime<Utc>>,
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self {
            source_timezone: config::default_source_timezone(),
            other_label: config::OTHER_LABEL.to_string(),
            fixed_now: None,
        }
    }
}

impl AnalyzerBuilder {
    /// Set the time zone raw export dates are written in.
    ///
    /// Defaults to `America/New_York`, which follows daylight saving: summer
    /// timestamps shift by 4 hours, not the flat 5 hours older exports were
    /// normalized with. Use `chrono_tz::EST` to reproduce that fixed `-05:00`
    /// offset.
    pub fn source_timezone(mut self, tz: Tz) -> Self {
        self.source_timezone = tz;
        self
    }

    /// Set the source time zone by IANA name, e.g. `"Europe/Paris"`.
    pub fn source_timezone_name(mut self, name: &str) -> Result<Self> {
        self.source_timezone = name.parse::<Tz>().map_err(|e| {
            AnalyzerError::InvalidArgument(format!("unknown time zone '{}': {}", name, e))
        })?;
        Ok(self)
    }

    /// Set the label of the remainder entry in truncated occurrence rankings.
    ///
    /// Defaults to `"Other"`.
    pub fn other_label(mut self, label: impl Into<String>) -> Self {
        self.other_label = label.into();
        self
    }

    /// Pin "now" for day-span computations instead of reading the system clock.
    pub fn fixed_now(mut self, now: DateTime<Utc>) -> Self {
        self.fixed_now = Some(now);
        self
    }

    /// Build the analyzer from the configured settings.
    ///
    /// Infallible: every setting is validated by its setter.
    pub fn build(self) -> Analyzer {
        Analyzer {
            source_timezone: self.source_timezone,
            other_label: self.other_label,
            fixed_now: self.fixed_now,
        }
    }
}

// ---------------------------------------------------------------------------
// Analyzer
// ---------------------------------------------------------------------------

/// Configured entry point over the pure functions in [`dates`] and [`stats`].
///
/// Holds no rows; each call receives its own slice.
#[derive(Debug, Clone)]
pub struct Analyzer {
    source_timezone: Tz,
    other_label: String,
    fixed_now: Option<DateTime<Utc>>,
}

impl Default for Analyzer {
    fn default() -> Self {
        AnalyzerBuilder::default().build()
    }
}

impl Analyzer {
    /// Create a new builder for configuring the analyzer.
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::default()
    }

    /// The time zone raw export dates are read in.
    pub fn source_timezone(&self) -> Tz {
        self.source_timezone
    }

    /// The instant day spans are measured against.
    pub fn now(&self) -> DateTime<Utc> {
        self.fixed_now.unwrap_or_else(Utc::now)
    }

    // -- Normalization -----------------------------------------------------

    /// Return a copy of `rows` with raw dates converted to ISO-8601 UTC.
    pub fn reformat_dates(&self, rows: &[Row]) -> Vec<Row> {
        dates::reformat_dates(rows, self.source_timezone)
    }

    /// Format a date as `"<day> <Month> <year>"`.
    pub fn format_date<D: Datelike>(date: &D) -> String {
        dates::format_date(date)
    }

    // -- Scalar aggregates -------------------------------------------------

    /// Rank item names by occurrence, optionally keeping only the top `limit`.
    pub fn count_item_occurrences(&self, rows: &[Row], limit: Option<usize>) -> Vec<ItemCount> {
        stats::count_item_occurrences_with_label(rows, limit, &self.other_label)
    }

    /// Sum of `price` over all rows, rounded to 2 decimals.
    pub fn total_sales(&self, rows: &[Row]) -> f64 {
        stats::total_sales(rows)
    }

    /// Sum of `fee` over all rows, rounded to 2 decimals.
    pub fn total_fees(&self, rows: &[Row]) -> f64 {
        stats::total_fees(rows)
    }

    /// Whole days between the oldest (last) row and now.
    pub fn last_item_day_difference(&self, rows: &[Row]) -> Result<i64> {
        stats::last_item_day_difference(rows, self.now())
    }

    /// Number of distinct UTC calendar days among normalized rows.
    pub fn count_different_days(&self, rows: &[Row]) -> Result<usize> {
        stats::count_different_days(rows)
    }

    /// The row with the highest `price`; the first one wins ties.
    pub fn most_expensive_item<'r>(&self, rows: &'r [Row]) -> Result<&'r Row> {
        stats::most_expensive_item(rows)
    }

    // -- Bucketed aggregation ----------------------------------------------

    /// Dense daily, monthly or yearly series of price sums and item counts.
    pub fn price_sum_and_item_count(
        &self,
        rows: &[Row],
        granularity: Granularity,
    ) -> Result<BucketSeries> {
        stats::price_sum_and_item_count(rows, granularity)
    }

    /// The day with the highest sales total; the earliest day wins ties.
    pub fn most_sales_in_one_day(&self, rows: &[Row]) -> Result<DailySales> {
        stats::most_sales_in_one_day(rows)
    }

    /// The day with the most rows; the earliest day wins ties.
    pub fn most_items_sold_in_one_day(&self, rows: &[Row]) -> Result<DailyItems> {
        stats::most_items_sold_in_one_day(rows)
    }

    /// Every headline figure in one pass, with the `top_n` best-selling names.
    pub fn summarize(&self, rows: &[Row], top_n: usize) -> Result<SalesSummary> {
        stats::summarize(rows, top_n, &self.other_label, self.now())
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Analyzer(source_timezone={}, other_label={}, fixed_now={})",
            self.source_timezone.name(),
            self.other_label,
            self.fixed_now
                .map(|now| dates::to_iso_string(&now))
                .unwrap_or_else(|| "none".to_string())
        )
    }
}
