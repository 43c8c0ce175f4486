//! Record types for the observation store
//!
//! This module declares the schema the service reads:
//! - `Observation`: one daily reading from the `measurement` table
//! - `Station`: station metadata from the `station` table
//! - `ObservationFilter`: predicates applied when selecting observations
//! - `StationActivity` and `TemperatureStats`: aggregates computed by the store

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used by every stored `date` column
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single daily weather observation
///
/// Dates are kept as the stored `YYYY-MM-DD` strings. The fixed-width
/// format makes lexicographic order equal to chronological order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Observation {
    /// Recording station code (e.g. "USC00519281")
    pub station: String,
    /// Observation date, `YYYY-MM-DD`
    pub date: String,
    /// Precipitation amount, missing on some days
    pub precipitation: Option<f64>,
    /// Observed temperature
    pub temperature: f64,
}

/// Station metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Station {
    /// Unique station code, matches `Observation::station`
    pub station: String,
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub elevation: Option<f64>,
}

/// Number of observations recorded by one station
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StationActivity {
    pub station: String,
    pub count: u64,
}

/// Min/average/max temperature over a non-empty set of observations
///
/// An empty selection has no stats at all; the store returns `None`
/// rather than a partially filled value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TemperatureStats {
    pub min: f64,
    pub avg: f64,
    pub max: f64,
    /// Number of readings the stats were computed over
    pub samples: u64,
}

/// Predicates for selecting observations
///
/// All set predicates are combined with AND. Date bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObservationFilter {
    /// Only observations on or after this date
    pub since: Option<NaiveDate>,
    /// Only observations on or before this date
    pub until: Option<NaiveDate>,
    /// Only observations from this station
    pub station: Option<String>,
    /// Skip observations without a precipitation value
    pub require_precipitation: bool,
}

impl ObservationFilter {
    /// Create an empty filter (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: lower date bound (inclusive)
    pub fn since(mut self, date: NaiveDate) -> Self {
        self.since = Some(date);
        self
    }

    /// Builder: upper date bound (inclusive)
    pub fn until(mut self, date: NaiveDate) -> Self {
        self.until = Some(date);
        self
    }

    /// Builder: restrict to one station
    pub fn station(mut self, station: impl Into<String>) -> Self {
        self.station = Some(station.into());
        self
    }

    /// Builder: require a precipitation value
    pub fn with_precipitation(mut self) -> Self {
        self.require_precipitation = true;
        self
    }

    /// Build the SQL `WHERE` clause and its positional parameters
    ///
    /// Dates are bound as `YYYY-MM-DD` strings so the comparison runs
    /// against the stored text column.
    pub(crate) fn to_sql(&self) -> (String, Vec<String>) {
        let mut clauses = Vec::new();
        let mut params = Vec::new();

        if let Some(since) = self.since {
            params.push(since.format(DATE_FORMAT).to_string());
            clauses.push(format!("date >= ?{}", params.len()));
        }
        if let Some(until) = self.until {
            params.push(until.format(DATE_FORMAT).to_string());
            clauses.push(format!("date <= ?{}", params.len()));
        }
        if let Some(station) = &self.station {
            params.push(station.clone());
            clauses.push(format!("station = ?{}", params.len()));
        }
        if self.require_precipitation {
            clauses.push("prcp IS NOT NULL".to_string());
        }

        if clauses.is_empty() {
            (String::new(), params)
        } else {
            (format!("WHERE {}", clauses.join(" AND ")), params)
        }
    }
}
