//! SQLite-backed observation store
//!
//! The store is a read-only SQLite file with two tables, `measurement`
//! and `station`. Nothing is held open between requests: every call to
//! [`WeatherStore::run`] opens a fresh read-only connection on the
//! blocking pool, hands a [`Session`] to the closure and drops the
//! connection when the closure returns.

use crate::store::error::{StoreError, StoreResult};
use crate::store::types::{
    Observation, ObservationFilter, Station, StationActivity, TemperatureStats, DATE_FORMAT,
};
use chrono::NaiveDate;
use rusqlite::{params_from_iter, Connection, OpenFlags};
use std::path::{Path, PathBuf};

/// Tables and columns the service depends on
const SCHEMA: &[(&str, &[&str])] = &[
    ("measurement", &["id", "station", "date", "prcp", "tobs"]),
    (
        "station",
        &["id", "station", "name", "latitude", "longitude", "elevation"],
    ),
];

/// Handle to the observation database
///
/// Cheap to clone; it only carries the database path.
#[derive(Debug, Clone)]
pub struct WeatherStore {
    path: PathBuf,
}

impl WeatherStore {
    /// Create a store handle for the database at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a read-only session on the current thread
    pub fn open_session(&self) -> StoreResult<Session> {
        if !self.path.is_file() {
            return Err(StoreError::Unavailable(format!(
                "database not found at {}",
                self.path.display()
            )));
        }

        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| {
            StoreError::Unavailable(format!("failed to open {}: {}", self.path.display(), e))
        })?;

        tracing::trace!(path = %self.path.display(), "Opened store session");
        Ok(Session { conn })
    }

    /// Run `f` against a per-request session on the blocking thread pool
    ///
    /// The session is released as soon as `f` returns.
    pub async fn run<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&Session) -> Result<T, E> + Send + 'static,
        T: Send + 'static,
        E: From<StoreError> + Send + 'static,
    {
        let store = self.clone();
        tokio::task::spawn_blocking(move || {
            let session = store.open_session()?;
            f(&session)
        })
        .await
        .map_err(|e| E::from(StoreError::from(e)))?
    }
}

/// One open, read-only connection to the store
pub struct Session {
    conn: Connection,
}

impl Session {
    /// Check that every table and column the service reads exists
    pub fn verify_schema(&self) -> StoreResult<()> {
        for (table, columns) in SCHEMA {
            let mut stmt = self
                .conn
                .prepare("SELECT name FROM pragma_table_info(?1)")?;
            let present: Vec<String> = stmt
                .query_map([*table], |row| row.get(0))?
                .collect::<Result<_, _>>()?;

            if present.is_empty() {
                return Err(StoreError::Schema(format!("missing table `{}`", table)));
            }

            if let Some(missing) = columns
                .iter()
                .find(|c| !present.iter().any(|p| p.eq_ignore_ascii_case(c)))
            {
                return Err(StoreError::Schema(format!(
                    "table `{}` has no column `{}`",
                    table, missing
                )));
            }
        }
        Ok(())
    }

    /// Latest observation date, or `None` when there are no observations
    pub fn latest_date(&self) -> StoreResult<Option<NaiveDate>> {
        let latest: Option<String> =
            self.conn
                .query_row("SELECT MAX(date) FROM measurement", [], |row| row.get(0))?;

        latest
            .map(|s| {
                NaiveDate::parse_from_str(&s, DATE_FORMAT).map_err(|_| StoreError::CorruptDate(s))
            })
            .transpose()
    }

    /// Total number of observations
    pub fn observation_count(&self) -> StoreResult<u64> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM measurement", [], |row| row.get(0))?;
        Ok(count.max(0) as u64)
    }

    /// Observations per station, busiest first
    ///
    /// Stations with equal counts are ordered by station code ascending.
    pub fn station_activity(&self) -> StoreResult<Vec<StationActivity>> {
        let mut stmt = self.conn.prepare(
            "SELECT station, COUNT(*) AS n FROM measurement
             GROUP BY station
             ORDER BY n DESC, station ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let count: i64 = row.get(1)?;
            Ok(StationActivity {
                station: row.get(0)?,
                count: count.max(0) as u64,
            })
        })?;

        Ok(rows.collect::<Result<_, _>>()?)
    }

    /// Observations matching `filter`, in insertion (primary key) order
    pub fn observations(&self, filter: &ObservationFilter) -> StoreResult<Vec<Observation>> {
        let (where_clause, params) = filter.to_sql();
        let sql = format!(
            "SELECT station, date, prcp, tobs FROM measurement {} ORDER BY id",
            where_clause
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(params.iter()), |row| {
            Ok(Observation {
                station: row.get(0)?,
                date: row.get(1)?,
                precipitation: row.get(2)?,
                temperature: row.get(3)?,
            })
        })?;

        Ok(rows.collect::<Result<_, _>>()?)
    }

    /// Min/avg/max temperature over observations matching `filter`
    ///
    /// Returns `None` when no observation matches.
    pub fn temperature_stats(
        &self,
        filter: &ObservationFilter,
    ) -> StoreResult<Option<TemperatureStats>> {
        let (where_clause, params) = filter.to_sql();
        let sql = format!(
            "SELECT MIN(tobs), AVG(tobs), MAX(tobs), COUNT(tobs) FROM measurement {}",
            where_clause
        );

        let (min, avg, max, samples): (Option<f64>, Option<f64>, Option<f64>, i64) = self
            .conn
            .query_row(&sql, params_from_iter(params.iter()), |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
            })?;

        match (min, avg, max) {
            (Some(min), Some(avg), Some(max)) if samples > 0 => Ok(Some(TemperatureStats {
                min,
                avg,
                max,
                samples: samples as u64,
            })),
            _ => Ok(None),
        }
    }

    /// All station metadata rows, in primary key order
    pub fn stations(&self) -> StoreResult<Vec<Station>> {
        let mut stmt = self.conn.prepare(
            "SELECT station, name, latitude, longitude, elevation FROM station ORDER BY id",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Station {
                station: row.get(0)?,
                name: row.get(1)?,
                latitude: row.get(2)?,
                longitude: row.get(3)?,
                elevation: row.get(4)?,
            })
        })?;

        Ok(rows.collect::<Result<_, _>>()?)
    }
}
