//! Entry service for recording juicing sessions

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use shared::{
    entry_stats, normalize_fruit_name, pooled_averages, select_history, EntryStats, JuiceRecord,
    PooledAverages, FRUIT_OPTIONS,
};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::store::RecordStore;

/// Entry service for appending and listing juice records
#[derive(Clone)]
pub struct EntryService {
    store: RecordStore,
}

/// Input for recording a juicing session
#[derive(Debug, Deserialize, Validate)]
pub struct RecordEntryInput {
    #[validate(length(min = 1, max = 50))]
    pub fruit: String,
    /// Defaults to today
    pub date: Option<NaiveDate>,
    pub fruit_count: Option<u32>,
    #[validate(range(min = 0.0))]
    pub weight_g: Option<f64>,
    #[validate(range(min = 0.0))]
    pub juice_oz: f64,
}

/// A stored entry with its yield compared to the fruit's prior history
#[derive(Debug, Serialize)]
pub struct RecordedEntry {
    pub record: JuiceRecord,
    pub stats: EntryStats,
    /// Averages over entries recorded before this one
    pub fruit_averages: PooledAverages,
}

impl EntryService {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// List stored entries, optionally for one fruit in date order
    pub async fn list_entries(&self, fruit: Option<&str>) -> AppResult<Vec<JuiceRecord>> {
        let records = self.store.fetch_all().await?;
        match fruit {
            Some(fruit) => {
                let history = select_history(&records, fruit, None)?;
                Ok(history.iter().cloned().collect())
            }
            None => Ok(records),
        }
    }

    /// Preset fruit options followed by any other fruit already recorded
    pub async fn known_fruits(&self) -> AppResult<Vec<String>> {
        let records = self.store.fetch_all().await?;
        let mut fruits: Vec<String> = FRUIT_OPTIONS.iter().map(|f| f.to_string()).collect();
        for record in &records {
            let name = normalize_fruit_name(&record.fruit);
            if !name.is_empty() && !fruits.contains(&name) {
                fruits.push(name);
            }
        }
        Ok(fruits)
    }

    /// Record a new entry
    pub async fn record_entry(&self, input: RecordEntryInput) -> AppResult<RecordedEntry> {
        input.validate()?;
        shared::validate_fruit_name(&input.fruit)
            .map_err(|msg| AppError::validation("fruit", msg))?;
        shared::validate_juice_volume(input.juice_oz)
            .map_err(|msg| AppError::validation("juice_oz", msg))?;
        let weight_g = input.weight_g.unwrap_or(0.0);
        shared::validate_weight_grams(weight_g)
            .map_err(|msg| AppError::validation("weight_g", msg))?;

        let record = JuiceRecord::new(
            input.date.unwrap_or_else(|| Local::now().date_naive()),
            normalize_fruit_name(&input.fruit),
            input.fruit_count.unwrap_or(0),
            weight_g,
            input.juice_oz,
        );

        // Averages describe the history the user is comparing against
        let snapshot = self.store.append_with_snapshot(&record).await?;
        let history = select_history(&snapshot, &record.fruit, None)?;
        let fruit_averages = pooled_averages(&history);

        tracing::info!(
            fruit = %record.fruit,
            fruit_count = record.fruit_count,
            weight_g = record.weight_g,
            juice_oz = record.juice_oz,
            "Recorded juice entry"
        );

        Ok(RecordedEntry {
            stats: entry_stats(&record),
            record,
            fruit_averages,
        })
    }
}
