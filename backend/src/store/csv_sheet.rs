//! CSV record sheet
//!
//! Columns match the original juice tracking spreadsheet:
//! `Date, Fruit, Limes, Weight (g), Juice (fl oz)`.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::JuiceRecord;
use tokio::sync::Mutex;

use crate::error::{AppError, AppResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Append-only CSV file of juice records
#[derive(Clone)]
pub struct CsvStore {
    path: Arc<PathBuf>,
    lock: Arc<Mutex<()>>,
}

/// One spreadsheet row; blank cells read as `None`
#[derive(Debug, Serialize, Deserialize)]
struct SheetRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Fruit")]
    fruit: String,
    #[serde(rename = "Limes")]
    fruit_count: Option<f64>,
    #[serde(rename = "Weight (g)")]
    weight_g: Option<f64>,
    #[serde(rename = "Juice (fl oz)")]
    juice_oz: Option<f64>,
}

impl From<&JuiceRecord> for SheetRow {
    fn from(record: &JuiceRecord) -> Self {
        Self {
            date: record.date.format(DATE_FORMAT).to_string(),
            fruit: record.fruit.clone(),
            fruit_count: Some(f64::from(record.fruit_count)),
            weight_g: Some(record.weight_g),
            juice_oz: Some(record.juice_oz),
        }
    }
}

impl SheetRow {
    /// Convert to a record, explaining why the row is unusable otherwise.
    ///
    /// Blank count and weight cells become zero so the row still counts
    /// towards the other ratio; a blank juice cell makes the row useless.
    fn into_record(self) -> Result<JuiceRecord, String> {
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .map_err(|e| format!("invalid date {:?}: {}", self.date, e))?;

        let fruit_count = match self.fruit_count {
            None => 0,
            Some(n) if n >= 0.0 && n.fract() == 0.0 && n <= f64::from(u32::MAX) => n as u32,
            Some(n) => return Err(format!("invalid fruit count {}", n)),
        };
        let weight_g = self.weight_g.unwrap_or(0.0);
        shared::validate_weight_grams(weight_g).map_err(str::to_string)?;
        let juice_oz = self.juice_oz.ok_or_else(|| "missing juice volume".to_string())?;
        shared::validate_juice_volume(juice_oz).map_err(str::to_string)?;

        Ok(JuiceRecord::new(date, self.fruit, fruit_count, weight_g, juice_oz))
    }
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub async fn fetch_all(&self) -> AppResult<Vec<JuiceRecord>> {
        let _guard = self.lock.lock().await;
        let path = Arc::clone(&self.path);

        tokio::task::spawn_blocking(move || read_rows(&path))
            .await
            .map_err(|e| AppError::Internal(format!("CSV read task failed: {}", e)))?
    }

    /// Read every record, then append one, holding the sheet lock across both
    pub async fn append_with_snapshot(&self, record: &JuiceRecord) -> AppResult<Vec<JuiceRecord>> {
        let _guard = self.lock.lock().await;
        let path = Arc::clone(&self.path);
        let row = SheetRow::from(record);

        tokio::task::spawn_blocking(move || {
            let snapshot = read_rows(&path)?;
            append_row(&path, &row)?;
            Ok(snapshot)
        })
        .await
        .map_err(|e| AppError::Internal(format!("CSV append task failed: {}", e)))?
    }

    /// The sheet is reachable when it exists and can be opened, or does not
    /// exist yet but its directory does
    pub async fn ping(&self) -> bool {
        let path = Arc::clone(&self.path);
        tokio::task::spawn_blocking(move || {
            if path.exists() {
                std::fs::File::open(path.as_path()).is_ok()
            } else {
                match path.parent() {
                    Some(parent) if !parent.as_os_str().is_empty() => parent.is_dir(),
                    _ => true,
                }
            }
        })
        .await
        .unwrap_or(false)
    }
}

fn append_row(path: &Path, row: &SheetRow) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let needs_header = file.metadata()?.len() == 0;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(needs_header)
        .from_writer(file);
    writer.serialize(row)?;
    writer.flush()?;
    Ok(())
}

fn read_rows(path: &Path) -> AppResult<Vec<JuiceRecord>> {
    if !path.exists() {
        tracing::debug!("Record sheet {} does not exist yet", path.display());
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<SheetRow>().enumerate() {
        // Header is line 1
        let line = index + 2;
        let parsed = row
            .map_err(|e| e.to_string())
            .and_then(SheetRow::into_record);
        match parsed {
            Ok(record) => records.push(record),
            Err(reason) => tracing::warn!("Skipping record sheet line {}: {}", line, reason),
        }
    }

    Ok(records)
}
