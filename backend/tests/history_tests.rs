//! History selection and entry statistics properties

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use shared::{entry_stats, pooled_averages, select_history, JuiceRecord, GRAMS_PER_POUND};

fn record(day: i64, fruit: &str, count: u32, weight: f64, juice: f64) -> JuiceRecord {
    JuiceRecord::new(
        NaiveDate::from_ymd_opt(2023, 6, 1).unwrap() + Duration::days(day),
        fruit,
        count,
        weight,
        juice,
    )
}

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Mixed-fruit records in arbitrary date order, spellings varied
fn shuffled_records_strategy() -> impl Strategy<Value = Vec<JuiceRecord>> {
    let fruit = prop::sample::select(vec!["Lime", "lime", " LIME ", "Lemon", "orange"]);
    prop::collection::vec(
        (0..200i64, fruit, 0..=12u32, 0..=2000u32, 0..=300u32),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(day, fruit, count, weight, juice)| {
                record(day, fruit, count, f64::from(weight), f64::from(juice) / 10.0)
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Unsorted store input still yields a chronological, single-fruit history
    #[test]
    fn test_history_is_chronological_and_filtered(records in shuffled_records_strategy()) {
        let history = select_history(&records, "lime", None).unwrap();
        let expected = records.iter().filter(|r| r.fruit.trim().eq_ignore_ascii_case("lime")).count();

        prop_assert_eq!(history.len(), expected);
        prop_assert!(history.iter().all(|r| r.fruit.trim().eq_ignore_ascii_case("lime")));
        let dates: Vec<NaiveDate> = history.iter().map(|r| r.date).collect();
        prop_assert!(dates.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    /// Entry ratios exist exactly when their denominators are positive
    #[test]
    fn test_entry_stats_guard_zero_denominators(
        count in 0..=12u32,
        weight in 0..=2000u32,
        juice in 0..=300u32
    ) {
        let stats = entry_stats(&record(0, "Lime", count, f64::from(weight), f64::from(juice) / 10.0));
        prop_assert_eq!(stats.juice_per_fruit.is_some(), count > 0);
        prop_assert_eq!(stats.juice_per_pound.is_some(), weight > 0);
    }
}

#[test]
fn test_same_day_entries_keep_insertion_order() {
    let records = vec![
        record(2, "Lime", 3, 300.0, 4.0),
        record(1, "Lime", 1, 100.0, 1.0),
        record(2, "Lime", 4, 320.0, 4.5),
    ];
    let history = select_history(&records, "Lime", None).unwrap();
    let counts: Vec<u32> = history.iter().map(|r| r.fruit_count).collect();
    assert_eq!(counts, vec![1, 3, 4]);
}

#[test]
fn test_pooled_averages_weight_large_batches() {
    let records = vec![
        record(0, "Lime", 2, 200.0, 2.0),
        record(1, "Lime", 8, GRAMS_PER_POUND * 2.0 - 200.0, 14.0),
    ];
    let history = select_history(&records, "Lime", None).unwrap();
    let averages = pooled_averages(&history);

    assert_eq!(averages.record_count, 2);
    assert!((averages.avg_per_fruit.unwrap() - 1.6).abs() < 1e-12);
    assert!((averages.avg_per_pound.unwrap() - 8.0).abs() < 1e-9);
}

#[test]
fn test_pooled_averages_of_empty_history() {
    let history = select_history(&[], "Lime", None).unwrap();
    let averages = pooled_averages(&history);
    assert_eq!(averages.record_count, 0);
    assert_eq!(averages.avg_per_fruit, None);
    assert_eq!(averages.avg_per_pound, None);
}
