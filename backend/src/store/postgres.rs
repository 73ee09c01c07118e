//! PostgreSQL record store

use std::time::Duration;

use chrono::NaiveDate;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use shared::JuiceRecord;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgExecutor, PgPool};

use crate::config::StorageConfig;
use crate::error::{AppError, AppResult};

#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

/// Database row for a juice entry
#[derive(Debug, Clone, sqlx::FromRow)]
struct JuiceEntryRow {
    entry_date: NaiveDate,
    fruit: String,
    fruit_count: i32,
    weight_g: Decimal,
    juice_oz: Decimal,
}

impl TryFrom<JuiceEntryRow> for JuiceRecord {
    type Error = AppError;

    fn try_from(row: JuiceEntryRow) -> Result<Self, Self::Error> {
        let fruit_count = u32::try_from(row.fruit_count).map_err(|_| {
            AppError::StorageError(format!("negative fruit count {}", row.fruit_count))
        })?;
        let weight_g = row
            .weight_g
            .to_f64()
            .ok_or_else(|| AppError::StorageError(format!("unreadable weight {}", row.weight_g)))?;
        let juice_oz = row
            .juice_oz
            .to_f64()
            .ok_or_else(|| AppError::StorageError(format!("unreadable juice {}", row.juice_oz)))?;

        Ok(JuiceRecord::new(
            row.entry_date,
            row.fruit,
            fruit_count,
            weight_g,
            juice_oz,
        ))
    }
}

fn to_numeric(field: &str, value: f64) -> AppResult<Decimal> {
    Decimal::from_f64(value)
        .ok_or_else(|| AppError::validation(field, format!("{} cannot be stored", value)))
}

async fn insert_row<'e, E: PgExecutor<'e>>(executor: E, record: &JuiceRecord) -> AppResult<()> {
    let fruit_count = i32::try_from(record.fruit_count)
        .map_err(|_| AppError::validation("fruit_count", "Fruit count is too large"))?;

    sqlx::query(
        r#"
        INSERT INTO juice_entries (entry_date, fruit, fruit_count, weight_g, juice_oz)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(record.date)
    .bind(&record.fruit)
    .bind(fruit_count)
    .bind(to_numeric("weight_g", record.weight_g)?)
    .bind(to_numeric("juice_oz", record.juice_oz)?)
    .execute(executor)
    .await?;

    Ok(())
}

async fn fetch_rows<'e, E: PgExecutor<'e>>(executor: E) -> AppResult<Vec<JuiceRecord>> {
    let rows = sqlx::query_as::<_, JuiceEntryRow>(
        r#"
        SELECT entry_date, fruit, fruit_count, weight_g, juice_oz
        FROM juice_entries
        ORDER BY entry_date ASC, created_at ASC
        "#,
    )
    .fetch_all(executor)
    .await?;

    rows.into_iter().map(JuiceRecord::try_from).collect()
}

impl PgStore {
    pub async fn connect(config: &StorageConfig) -> anyhow::Result<Self> {
        let url = config
            .database_url
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("storage.database_url is not set"))?;

        tracing::info!("Connecting to database...");
        let db = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(30))
            .connect(url)
            .await?;
        tracing::info!("Database connection established");

        Ok(Self { db })
    }

    pub async fn migrate(&self) -> anyhow::Result<()> {
        tracing::info!("Running database migrations...");
        sqlx::migrate!("./migrations").run(&self.db).await?;
        tracing::info!("Migrations completed");
        Ok(())
    }

    pub async fn fetch_all(&self) -> AppResult<Vec<JuiceRecord>> {
        fetch_rows(&self.db).await
    }

    /// Read every record, then append one, with no other append in between
    pub async fn append_with_snapshot(&self, record: &JuiceRecord) -> AppResult<Vec<JuiceRecord>> {
        let mut tx = self.db.begin().await?;
        // Self-conflicting mode: concurrent appenders queue, plain readers do not
        sqlx::query("LOCK TABLE juice_entries IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await?;

        let snapshot = fetch_rows(&mut *tx).await?;
        insert_row(&mut *tx, record).await?;
        tx.commit().await?;

        Ok(snapshot)
    }

    pub async fn ping(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.db).await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn row(count: i32, weight: &str, juice: &str) -> JuiceEntryRow {
        JuiceEntryRow {
            entry_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            fruit: "Lemon".to_string(),
            fruit_count: count,
            weight_g: Decimal::from_str(weight).unwrap(),
            juice_oz: Decimal::from_str(juice).unwrap(),
        }
    }

    #[test]
    fn test_row_conversion() {
        let record = JuiceRecord::try_from(row(3, "412.50", "4.25")).unwrap();
        assert_eq!(record.fruit_count, 3);
        assert_eq!(record.weight_g, 412.5);
        assert_eq!(record.juice_oz, 4.25);
    }

    #[test]
    fn test_row_conversion_rejects_negative_count() {
        assert!(JuiceRecord::try_from(row(-1, "100", "1")).is_err());
    }

    #[test]
    fn test_to_numeric() {
        assert_eq!(to_numeric("weight_g", 350.5).unwrap(), Decimal::from_str("350.5").unwrap());
        assert!(to_numeric("weight_g", f64::NAN).is_err());
    }
}
