//! # Surfs Up
//!
//! Read-only climate API over a fixed dataset of daily weather observations
//! (precipitation and temperature, tagged by station and date).
//!
//! ## Modules
//!
//! - [`store`]: Typed schema and per-request SQLite sessions
//! - [`query`]: Date windows, station ranking and the climate queries
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use surfsup::query::QueryService;
//! use surfsup::store::WeatherStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = QueryService::new(WeatherStore::new("Resources/hawaii.sqlite"));
//!
//!     for reading in service.precipitation().await? {
//!         println!("{} {}", reading.date, reading.prcp);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod logging;
pub mod query;
pub mod store;

// Re-export top-level types for convenience
pub use store::{
    Observation, ObservationFilter, Session, Station, StationActivity, StoreError, StoreResult,
    TemperatureStats, WeatherStore,
};

pub use query::{
    DateWindow, PrecipitationReading, QueryError, QueryResult, QueryService, TemperatureReading,
};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, LoggingConfig, StoreConfig};
