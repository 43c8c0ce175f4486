//! Climate Query Layer
//!
//! Selects, filters and aggregates observations for the API:
//!
//! - **window**: Most-recent-year date window and date input parsing
//! - **activity**: Station ranking and most-active-station resolution
//! - **handlers**: The five climate queries, run inside one store session
//! - **service**: Async `QueryService` wrapping the handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use surfsup::query::QueryService;
//! use surfsup::store::WeatherStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = QueryService::new(WeatherStore::new("Resources/hawaii.sqlite"));
//!
//!     let busiest = service.stations().await?;
//!     println!("busiest station: {}", busiest[0].station);
//!
//!     if let Some(stats) = service.temperature_stats("2017-01-01", Some("2017-01-07")).await? {
//!         println!("min {} / avg {:.1} / max {}", stats.min, stats.avg, stats.max);
//!     }
//!     Ok(())
//! }
//! ```

pub mod activity;
pub mod error;
pub mod handlers;
pub mod service;
pub mod window;

pub use activity::{most_active_station, station_ranking};
pub use error::{QueryError, QueryResult};
pub use handlers::{PrecipitationReading, TemperatureReading};
pub use service::QueryService;
pub use window::{parse_iso_date, resolve_date_window, DateWindow, LOOKBACK_DAYS};
