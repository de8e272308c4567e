//! Occurrence ranking by item name.

mod common;

use sales_analyzer::stats::count_item_occurrences;
use sales_analyzer::{Analyzer, ItemCount};

fn named(names: &[&str]) -> Vec<sales_analyzer::Row> {
    names
        .iter()
        .map(|name| common::order(name, "2024-01-01", 1.0, 0.1))
        .collect()
}

#[test]
fn full_ranking_without_limit() {
    let ranked = count_item_occurrences(&common::sample_rows(), None);
    assert_eq!(
        ranked,
        vec![
            ItemCount::new("Mug", 3),
            ItemCount::new("Sticker", 2),
            ItemCount::new("Poster", 1),
            ItemCount::new("Tote", 1),
        ]
    );
}

#[test]
fn limit_folds_remainder_into_other() {
    let ranked = count_item_occurrences(&named(&["a", "a", "b", "c"]), Some(2));
    assert_eq!(
        ranked,
        vec![
            ItemCount::new("a", 2),
            ItemCount::new("b", 1),
            ItemCount::new("Other", 1),
        ]
    );
}

#[test]
fn limit_zero_is_all_other() {
    let ranked = count_item_occurrences(&named(&["a", "a", "b"]), Some(0));
    assert_eq!(ranked, vec![ItemCount::new("Other", 3)]);
}

#[test]
fn limit_covering_all_names_adds_no_other() {
    let rows = named(&["a", "b", "b"]);
    assert_eq!(count_item_occurrences(&rows, Some(2)).len(), 2);
    assert_eq!(count_item_occurrences(&rows, Some(10)).len(), 2);
}

#[test]
fn empty_rows_rank_nothing() {
    assert!(count_item_occurrences(&[], None).is_empty());
    assert!(count_item_occurrences(&[], Some(3)).is_empty());
}

#[test]
fn counts_always_sum_to_row_count() {
    let rows = common::sample_rows();
    for limit in [None, Some(0), Some(1), Some(2), Some(3), Some(4), Some(9)] {
        let total: usize = count_item_occurrences(&rows, limit)
            .iter()
            .map(|item| item.count)
            .sum();
        assert_eq!(total, rows.len(), "limit {:?}", limit);
    }
}

#[test]
fn analyzer_applies_configured_other_label() {
    let analyzer = Analyzer::builder().other_label("Rest").build();
    let ranked = analyzer.count_item_occurrences(&common::sample_rows(), Some(1));
    assert_eq!(ranked.last().unwrap(), &ItemCount::new("Rest", 4));
}
