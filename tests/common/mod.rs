//! Shared fixtures for the sales-analyzer integration tests.
//!
//! Rows are built from `serde_json::json!` values so the fixtures exercise the
//! same field names the ingestion layer produces.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sales_analyzer::Row;

/// Deserialize a single row from a JSON value.
pub fn row(value: serde_json::Value) -> Row {
    serde_json::from_value(value).unwrap()
}

/// A row with only the fields the aggregates read.
pub fn order(name: &str, date: &str, price: f64, fee: f64) -> Row {
    row(serde_json::json!({
        "name": name,
        "sku": format!("SKU-{}", name.to_uppercase()),
        "orderid": "1000",
        "date": date,
        "status": "Completed",
        "price": price,
        "net": price - fee,
        "fee": fee,
    }))
}

/// Normalized, newest-first sample shop history spanning 2024-01-01..=2024-01-06.
pub fn sample_rows() -> Vec<Row> {
    vec![
        order("Mug", "2024-01-06T18:20:00.000Z", 12.50, 1.10),
        order("Poster", "2024-01-06T09:05:00.000Z", 20.00, 1.60),
        order("Mug", "2024-01-04T22:45:00.000Z", 12.50, 1.10),
        order("Sticker", "2024-01-04T13:00:00.000Z", 3.25, 0.35),
        order("Mug", "2024-01-04T08:30:00.000Z", 12.50, 1.10),
        order("Tote", "2024-01-02T16:10:00.000Z", 25.00, 2.00),
        order("Sticker", "2024-01-01T11:00:00.000Z", 3.25, 0.35),
    ]
}

/// Raw rows as exported in New York wall-clock time, newest-first.
pub fn raw_rows() -> Vec<Row> {
    vec![
        order("Mug", "2024-01-06 13:20:00", 12.50, 1.10),
        order("Poster", "01/06/2024 4:05 AM", 20.00, 1.60),
        order("Tote", "2024-01-02 21:10", 25.00, 2.00),
    ]
}

/// Random normalized rows with dates scattered over `span_days` days.
pub fn random_rows(seed: u64, count: usize, span_days: i64) -> Vec<Row> {
    let mut rng = StdRng::seed_from_u64(seed);
    let names = ["Mug", "Poster", "Sticker", "Tote", "Pin", "Print"];
    let start = chrono::NaiveDate::from_ymd_opt(2023, 11, 20)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc();
    (0..count)
        .map(|_| {
            let offset = chrono::Duration::minutes(rng.gen_range(0..span_days * 24 * 60));
            let date = sales_analyzer::dates::to_iso_string(&(start + offset));
            let name = names[rng.gen_range(0..names.len())];
            let cents: i64 = rng.gen_range(50..20_000);
            order(name, &date, cents as f64 / 100.0, (cents / 13) as f64 / 100.0)
        })
        .collect()
}
