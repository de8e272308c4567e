use serde::{Deserialize, Serialize};

use super::row::Row;
use super::series::{DailyItems, DailySales};

// ---------------------------------------------------------------------------
// ItemCount — Occurrence ranking entry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCount {
    pub name: String,
    pub count: usize,
}

impl ItemCount {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

// ---------------------------------------------------------------------------
// SalesSummary — Headline figures for a report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    pub row_count: usize,
    pub total_sales: f64,
    pub total_fees: f64,
    pub distinct_days: usize,
    pub days_since_oldest: i64,
    pub top_items: Vec<ItemCount>,
    pub most_expensive_item: Row,
    pub best_sales_day: DailySales,
    pub best_items_day: DailyItems,
}

impl SalesSummary {
    pub fn to_json(&self) -> crate::Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
