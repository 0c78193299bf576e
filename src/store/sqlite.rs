use std::path::Path;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use super::ClimateStore;
use crate::Result;
use crate::config::DatabaseConfig;
use crate::models::{DateReading, ObservationKind, ObservationWindow, TemperatureStats};

const STATION_NAMES: &str = "SELECT name FROM station ORDER BY rowid";

const STATS_SINCE: &str = "SELECT CAST(MIN(tobs) AS REAL), CAST(AVG(tobs) AS REAL), CAST(MAX(tobs) AS REAL) \
     FROM measurement WHERE strftime('%Y-%m-%d', date) >= ?1";

const STATS_BETWEEN: &str = "SELECT CAST(MIN(tobs) AS REAL), CAST(AVG(tobs) AS REAL), CAST(MAX(tobs) AS REAL) \
     FROM measurement WHERE date >= ?1 AND date <= ?2";

/// `daily_readings` query for one projected column. The lowest rowid per date
/// is the representative row.
fn daily_readings_sql(kind: ObservationKind) -> String {
    format!(
        "SELECT date, CAST({column} AS REAL) FROM measurement \
         WHERE rowid IN (\
             SELECT MIN(rowid) FROM measurement \
             WHERE date >= ?1 AND date <= ?2 \
             GROUP BY date\
         ) \
         ORDER BY date DESC",
        column = kind.column()
    )
}

/// [`ClimateStore`] backed by a pool of read-only SQLite connections.
///
/// Each query checks a connection out for its own duration only; the
/// connection goes back to the pool when the query future completes or is
/// dropped.
#[derive(Debug, Clone)]
pub struct SqliteClimateStore {
    pool: SqlitePool,
}

impl SqliteClimateStore {
    /// Opens the database file read-only. Fails if the file does not exist.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let path = Path::new(&config.path);
        let options = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .connect_with(options)
            .await?;

        tracing::info!(
            path = %path.display(),
            max_connections = config.max_connections,
            "Opened climate database"
        );
        Ok(Self::from_pool(pool))
    }

    #[must_use]
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Waits for checked-out connections to return, then closes them all
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl ClimateStore for SqliteClimateStore {
    #[tracing::instrument(name = "daily_readings", level = "debug", skip(self))]
    async fn daily_readings(
        &self,
        kind: ObservationKind,
        window: ObservationWindow,
    ) -> Result<Vec<DateReading>> {
        let sql = daily_readings_sql(kind);
        let rows: Vec<(String, Option<f64>)> = sqlx::query_as(&sql)
            .bind(window.start)
            .bind(window.end)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(DateReading::from).collect())
    }

    #[tracing::instrument(name = "station_names", level = "debug", skip(self))]
    async fn station_names(&self) -> Result<Vec<Option<String>>> {
        let names = sqlx::query_scalar(STATION_NAMES)
            .fetch_all(&self.pool)
            .await?;
        Ok(names)
    }

    #[tracing::instrument(name = "temperature_stats_since", level = "debug", skip(self))]
    async fn temperature_stats_since(&self, start: &str) -> Result<TemperatureStats> {
        let row: (Option<f64>, Option<f64>, Option<f64>) = sqlx::query_as(STATS_SINCE)
            .bind(start)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    #[tracing::instrument(name = "temperature_stats_between", level = "debug", skip(self))]
    async fn temperature_stats_between(&self, start: &str, end: &str) -> Result<TemperatureStats> {
        let row: (Option<f64>, Option<f64>, Option<f64>) = sqlx::query_as(STATS_BETWEEN)
            .bind(start)
            .bind(end)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_readings_sql_projects_requested_column() {
        let prcp = daily_readings_sql(ObservationKind::Precipitation);
        assert!(prcp.contains("CAST(prcp AS REAL)"));
        assert!(prcp.contains("ORDER BY date DESC"));

        let tobs = daily_readings_sql(ObservationKind::Temperature);
        assert!(tobs.contains("CAST(tobs AS REAL)"));
        assert!(!tobs.contains("prcp"));
    }

    #[tokio::test]
    async fn test_connect_refuses_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig {
            path: dir.path().join("absent.sqlite").display().to_string(),
            ..DatabaseConfig::default()
        };

        let result = SqliteClimateStore::connect(&config).await;
        assert!(result.is_err());
        assert!(!dir.path().join("absent.sqlite").exists());
    }
}
