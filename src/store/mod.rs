//! Read-only access to the observation dataset
//!
//! The dataset holds two tables, `measurement` (one row per station and date)
//! and `station`. Handlers only talk to [`ClimateStore`], so the backing
//! database can be swapped out in tests.

use async_trait::async_trait;

use crate::Result;
use crate::models::{DateReading, ObservationKind, ObservationWindow, TemperatureStats};

pub mod sqlite;

pub use sqlite::SqliteClimateStore;

#[async_trait]
pub trait ClimateStore: Send + Sync {
    /// One reading per distinct date inside `window`, newest first.
    ///
    /// When several stations reported on the same date the first row in
    /// storage order supplies the value.
    async fn daily_readings(
        &self,
        kind: ObservationKind,
        window: ObservationWindow,
    ) -> Result<Vec<DateReading>>;

    /// Every station name, in storage order
    async fn station_names(&self) -> Result<Vec<Option<String>>>;

    /// Aggregate `tobs` over measurements whose formatted date is `>= start`
    async fn temperature_stats_since(&self, start: &str) -> Result<TemperatureStats>;

    /// Aggregate `tobs` over measurements with `start <= date <= end`, compared as raw strings
    async fn temperature_stats_between(&self, start: &str, end: &str) -> Result<TemperatureStats>;
}
