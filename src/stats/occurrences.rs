//! Occurrence ranking of order rows by item name.

use std::collections::HashMap;

use crate::config;
use crate::models::{ItemCount, Row};

/// Count how often every item name occurs, most frequent first.
///
/// Ties keep the order in which names were first seen. With `limit`, only the
/// top `limit` entries are kept and the remaining counts are folded into one
/// trailing `"Other"` entry (omitted when nothing remains).
pub fn count_item_occurrences(rows: &[Row], limit: Option<usize>) -> Vec<ItemCount> {
    count_item_occurrences_with_label(rows, limit, config::OTHER_LABEL)
}

/// Same as [`count_item_occurrences`] with a custom label for the remainder entry.
pub fn count_item_occurrences_with_label(
    rows: &[Row],
    limit: Option<usize>,
    other_label: &str,
) -> Vec<ItemCount> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut ranked: Vec<ItemCount> = Vec::new();

    for row in rows {
        match positions.get(row.name.as_str()).copied() {
            Some(pos) => ranked[pos].count += 1,
            None => {
                positions.insert(row.name.as_str(), ranked.len());
                ranked.push(ItemCount::new(row.name.as_str(), 1));
            }
        }
    }

    // Stable: equal counts stay in first-seen order.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));

    let Some(limit) = limit else {
        return ranked;
    };

    if limit >= ranked.len() {
        return ranked;
    }
    let rest: usize = ranked[limit..].iter().map(|item| item.count).sum();
    ranked.truncate(limit);
    if rest > 0 {
        ranked.push(ItemCount::new(other_label, rest));
    }
    ranked
}
