use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnalyzerError;

// ---------------------------------------------------------------------------
// Granularity — Calendar unit of a bucket
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Daily,
    Monthly,
    Yearly,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Daily => "daily",
            Granularity::Monthly => "monthly",
            Granularity::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Granularity::Daily),
            "monthly" => Ok(Granularity::Monthly),
            "yearly" => Ok(Granularity::Yearly),
            other => Err(AnalyzerError::InvalidArgument(format!(
                "unknown granularity '{}', expected daily, monthly or yearly",
                other
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// BucketSeries — Dense, gap-filled time series
// ---------------------------------------------------------------------------

/// Parallel arrays of bucket keys, rounded price sums and item counts.
///
/// Keys run contiguously from the oldest to the newest observed bucket, with
/// zero entries for periods that had no rows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketSeries {
    pub date_keys: Vec<String>,
    pub price_sums: Vec<f64>,
    pub item_counts: Vec<usize>,
}

/// Borrowed view of a single entry in a [`BucketSeries`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bucket<'a> {
    pub key: &'a str,
    pub price_sum: f64,
    pub item_count: usize,
}

impl BucketSeries {
    pub fn len(&self) -> usize {
        self.date_keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.date_keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Bucket<'_>> + '_ {
        self.date_keys
            .iter()
            .zip(&self.price_sums)
            .zip(&self.item_counts)
            .map(|((key, &price_sum), &item_count)| Bucket {
                key: key.as_str(),
                price_sum,
                item_count,
            })
    }

    pub(crate) fn push(&mut self, key: String, price_sum: f64, item_count: usize) {
        self.date_keys.push(key);
        self.price_sums.push(price_sum);
        self.item_counts.push(item_count);
    }
}

// ---------------------------------------------------------------------------
// Daily peaks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySales {
    pub sales: f64,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyItems {
    pub items: usize,
    pub date: String,
}
