//! Query Service
//!
//! Async entry point used by the HTTP layer and the CLI. Every call
//! validates its inputs, then runs one handler inside a fresh store
//! session on the blocking pool.

use crate::query::error::QueryResult;
use crate::query::handlers::{self, PrecipitationReading, TemperatureReading};
use crate::query::window::parse_iso_date;
use crate::store::{StationActivity, TemperatureStats, WeatherStore};
use std::time::Instant;

/// Read-only climate queries over a [`WeatherStore`]
#[derive(Debug, Clone)]
pub struct QueryService {
    store: WeatherStore,
}

impl QueryService {
    /// Create a service over `store`
    pub fn new(store: WeatherStore) -> Self {
        Self { store }
    }

    /// The underlying store handle
    pub fn store(&self) -> &WeatherStore {
        &self.store
    }

    /// Precipitation over the most recent year of data
    pub async fn precipitation(&self) -> QueryResult<Vec<PrecipitationReading>> {
        let started = Instant::now();
        let readings = self.store.run(handlers::precipitation).await?;
        tracing::debug!(
            rows = readings.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Precipitation query"
        );
        Ok(readings)
    }

    /// All stations ranked by observation count
    pub async fn stations(&self) -> QueryResult<Vec<StationActivity>> {
        let started = Instant::now();
        let ranking = self.store.run(handlers::stations).await?;
        tracing::debug!(
            stations = ranking.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Station ranking query"
        );
        Ok(ranking)
    }

    /// Last year of temperature readings at the most active station
    pub async fn tobs(&self) -> QueryResult<Vec<TemperatureReading>> {
        let started = Instant::now();
        let readings = self.store.run(handlers::tobs).await?;
        tracing::debug!(
            rows = readings.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Temperature observation query"
        );
        Ok(readings)
    }

    /// Temperature stats from `start` (and up to `end`, when given)
    ///
    /// Dates must be `YYYY-MM-DD`. `Ok(None)` means no observation matched.
    pub async fn temperature_stats(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> QueryResult<Option<TemperatureStats>> {
        let start = parse_iso_date(start)?;
        let end = end.map(parse_iso_date).transpose()?;

        let stats = self
            .store
            .run(move |session| handlers::temperature_stats(session, start, end))
            .await?;

        if stats.is_none() {
            tracing::info!(%start, end = ?end, "No observations in requested range");
        }
        Ok(stats)
    }
}
