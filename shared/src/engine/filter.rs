//! Historical record selection for a single fruit

use crate::error::{EngineError, EngineResult};
use crate::models::JuiceRecord;
use crate::validation::normalize_fruit_name;

/// Chronologically ordered records of one fruit
#[derive(Debug, Clone, PartialEq)]
pub struct History<'a> {
    pub fruit: String,
    /// Rolling window that was applied, `None` for full history
    pub window: Option<usize>,
    records: Vec<&'a JuiceRecord>,
}

impl<'a> History<'a> {
    pub fn records(&self) -> &[&'a JuiceRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &'a JuiceRecord> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Most recent record by date
    pub fn latest(&self) -> Option<&'a JuiceRecord> {
        self.records.last().copied()
    }
}

/// Select the records of `fruit`, oldest first, keeping only the last
/// `window` of them when a window is given.
///
/// The store's ordering is not trusted: matches are stably sorted by date so
/// same-day entries keep their insertion order. An empty result is a valid
/// history; only a blank fruit name or a zero window is an error.
pub fn select_history<'a>(
    records: &'a [JuiceRecord],
    fruit: &str,
    window: Option<usize>,
) -> EngineResult<History<'a>> {
    let fruit = normalize_fruit_name(fruit);
    if fruit.is_empty() {
        return Err(EngineError::EmptyFruitName);
    }
    if let Some(size) = window {
        if size == 0 {
            return Err(EngineError::InvalidWindow(size));
        }
    }

    let mut matching: Vec<&JuiceRecord> = records
        .iter()
        .filter(|record| normalize_fruit_name(&record.fruit) == fruit)
        .collect();
    matching.sort_by_key(|record| record.date);

    if let Some(size) = window {
        let skip = matching.len().saturating_sub(size);
        matching.drain(..skip);
    }

    Ok(History {
        fruit,
        window,
        records: matching,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(day: u32, fruit: &str, juice: f64) -> JuiceRecord {
        JuiceRecord::new(
            NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            fruit,
            4,
            300.0,
            juice,
        )
    }

    #[test]
    fn test_filters_by_normalized_fruit() {
        let records = vec![
            record(1, "Lime", 1.0),
            record(2, "Lemon", 2.0),
            record(3, "lime", 3.0),
        ];
        let history = select_history(&records, " LIME ", None).unwrap();
        assert_eq!(history.fruit, "Lime");
        assert_eq!(history.len(), 2);
        assert!(history.iter().all(|r| r.fruit.eq_ignore_ascii_case("lime")));
    }

    #[test]
    fn test_sorts_unordered_input_by_date() {
        let records = vec![
            record(9, "Lime", 9.0),
            record(2, "Lime", 2.0),
            record(5, "Lime", 5.0),
        ];
        let history = select_history(&records, "Lime", None).unwrap();
        let juices: Vec<f64> = history.iter().map(|r| r.juice_oz).collect();
        assert_eq!(juices, vec![2.0, 5.0, 9.0]);
        assert_eq!(history.latest().map(|r| r.juice_oz), Some(9.0));
    }

    #[test]
    fn test_same_day_keeps_insertion_order() {
        let records = vec![record(3, "Lime", 1.0), record(3, "Lime", 2.0)];
        let history = select_history(&records, "Lime", None).unwrap();
        assert_eq!(history.latest().map(|r| r.juice_oz), Some(2.0));
    }

    #[test]
    fn test_rolling_window_keeps_most_recent() {
        let records: Vec<JuiceRecord> = (1..=12).map(|d| record(d, "Lime", d as f64)).collect();
        let history = select_history(&records, "Lime", Some(3)).unwrap();
        let juices: Vec<f64> = history.iter().map(|r| r.juice_oz).collect();
        assert_eq!(juices, vec![10.0, 11.0, 12.0]);
        assert_eq!(history.window, Some(3));
    }

    #[test]
    fn test_window_larger_than_history() {
        let records = vec![record(1, "Lime", 1.0)];
        let history = select_history(&records, "Lime", Some(10)).unwrap();
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_empty_match_is_not_an_error() {
        let records = vec![record(1, "Lemon", 1.0)];
        let history = select_history(&records, "Lime", None).unwrap();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }

    #[test]
    fn test_rejects_blank_fruit_and_zero_window() {
        let records = vec![record(1, "Lime", 1.0)];
        assert_eq!(
            select_history(&records, "  ", None),
            Err(EngineError::EmptyFruitName)
        );
        assert_eq!(
            select_history(&records, "Lime", Some(0)),
            Err(EngineError::InvalidWindow(0))
        );
    }
}
