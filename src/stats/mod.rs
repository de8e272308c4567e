//! Aggregates over order rows.
//!
//! Every function here is pure and takes the rows by shared reference.
//! Functions that read dates expect the normalized ISO-8601 UTC form produced
//! by [`reformat_dates`](crate::dates::reformat_dates).

pub mod days;
pub mod occurrences;
pub mod series;
pub mod summary;
pub mod totals;

pub use days::{count_different_days, last_item_day_difference};
pub use occurrences::{count_item_occurrences, count_item_occurrences_with_label};
pub use series::{most_items_sold_in_one_day, most_sales_in_one_day, price_sum_and_item_count};
pub use summary::summarize;
pub use totals::{most_expensive_item, round2, total_fees, total_sales};
