use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Row — One order line item
// ---------------------------------------------------------------------------

/// One order line item as produced by the CSV ingestion layer.
///
/// `date` is either a raw wall-clock string in the source time zone or, after
/// [`reformat_dates`](crate::dates::reformat_dates), an ISO-8601 UTC timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Row {
    pub name: String,
    #[serde(default)]
    pub sku: String,
    #[serde(rename = "orderid", alias = "orderId", default)]
    pub order_id: String,
    pub date: String,
    #[serde(default)]
    pub status: String,
    pub price: f64,
    #[serde(default)]
    pub net: f64,
    #[serde(default)]
    pub fee: f64,
}

impl Row {
    /// Return a copy of this row carrying a different `date` string.
    pub fn with_date(&self, date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..self.clone()
        }
    }
}
