//! Data Transfer Objects
//!
//! Response types for the API endpoints, serialized to JSON.

use serde::Serialize;

use crate::query::{PrecipitationReading, TemperatureReading};
use crate::store::{StationActivity, TemperatureStats};

// ============================================
// CLIMATE DTOs
// ============================================

/// `{"date": ..., "prcp": ...}`
#[derive(Debug, Serialize)]
pub struct PrecipitationEntry {
    pub date: String,
    pub prcp: f64,
}

impl From<PrecipitationReading> for PrecipitationEntry {
    fn from(r: PrecipitationReading) -> Self {
        Self {
            date: r.date,
            prcp: r.prcp,
        }
    }
}

/// `{"station": ..., "count": ...}`
#[derive(Debug, Serialize)]
pub struct StationCountEntry {
    pub station: String,
    pub count: u64,
}

impl From<StationActivity> for StationCountEntry {
    fn from(a: StationActivity) -> Self {
        Self {
            station: a.station,
            count: a.count,
        }
    }
}

/// `{"date": ..., "temp": ...}`
#[derive(Debug, Serialize)]
pub struct TemperatureEntry {
    pub date: String,
    pub temp: f64,
}

impl From<TemperatureReading> for TemperatureEntry {
    fn from(r: TemperatureReading) -> Self {
        Self {
            date: r.date,
            temp: r.temp,
        }
    }
}

/// `{"TMIN": ..., "TAVG": ..., "TMAX": ...}`
///
/// All three fields are `null` together when no observation matched.
#[derive(Debug, Serialize, PartialEq)]
pub struct TemperatureStatsResponse {
    #[serde(rename = "TMIN")]
    pub tmin: Option<f64>,
    #[serde(rename = "TAVG")]
    pub tavg: Option<f64>,
    #[serde(rename = "TMAX")]
    pub tmax: Option<f64>,
}

impl TemperatureStatsResponse {
    /// The no-data body
    pub fn empty() -> Self {
        Self {
            tmin: None,
            tavg: None,
            tmax: None,
        }
    }
}

impl From<Option<TemperatureStats>> for TemperatureStatsResponse {
    fn from(stats: Option<TemperatureStats>) -> Self {
        match stats {
            Some(s) => Self {
                tmin: Some(s.min),
                tavg: Some(s.avg),
                tmax: Some(s.max),
            },
            None => Self::empty(),
        }
    }
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "unhealthy"
    pub status: String,
    /// Store status: "ok" or the error message
    pub store: String,
    /// Number of observations, when the store is readable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observations: Option<u64>,
    /// Uptime in seconds
    pub uptime_seconds: u64,
    /// Version string
    pub version: String,
}
