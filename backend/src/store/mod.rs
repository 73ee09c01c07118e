//! Record store adapters
//!
//! The store is append-only and read in full: every computation cycle takes
//! one snapshot with [`RecordStore::fetch_all`] and hands it to the engine.

mod csv_sheet;
mod postgres;

pub use csv_sheet::CsvStore;
pub use postgres::PgStore;

use shared::JuiceRecord;

use crate::config::{StorageBackend, StorageConfig};
use crate::error::AppResult;

/// Configured record store
#[derive(Clone)]
pub enum RecordStore {
    Csv(CsvStore),
    Postgres(PgStore),
}

impl RecordStore {
    /// Open the store selected by configuration
    pub async fn connect(config: &StorageConfig, environment: &str) -> anyhow::Result<Self> {
        match config.backend {
            StorageBackend::Csv => {
                tracing::info!("Using CSV record sheet at {}", config.csv_path);
                Ok(RecordStore::Csv(CsvStore::new(&config.csv_path)))
            }
            StorageBackend::Postgres => {
                let store = PgStore::connect(config).await?;
                // Run migrations in development
                if environment == "development" {
                    store.migrate().await?;
                }
                Ok(RecordStore::Postgres(store))
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            RecordStore::Csv(_) => "csv",
            RecordStore::Postgres(_) => "postgres",
        }
    }

    /// Append one record and return the records stored before it.
    ///
    /// No other append can land between the read and the write.
    pub async fn append_with_snapshot(&self, record: &JuiceRecord) -> AppResult<Vec<JuiceRecord>> {
        match self {
            RecordStore::Csv(store) => store.append_with_snapshot(record).await,
            RecordStore::Postgres(store) => store.append_with_snapshot(record).await,
        }
    }

    /// Read every stored record in storage order
    pub async fn fetch_all(&self) -> AppResult<Vec<JuiceRecord>> {
        match self {
            RecordStore::Csv(store) => store.fetch_all().await,
            RecordStore::Postgres(store) => store.fetch_all().await,
        }
    }

    /// Check the store can be reached
    pub async fn ping(&self) -> bool {
        match self {
            RecordStore::Csv(store) => store.ping().await,
            RecordStore::Postgres(store) => store.ping().await,
        }
    }
}
