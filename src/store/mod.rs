//! Observation Store
//!
//! Read-only access to the daily weather observations:
//!
//! - **types**: Statically declared records (Observation, Station) and filters
//! - **sqlite**: `WeatherStore` handle and per-request `Session`
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust,no_run
//! use surfsup::store::{ObservationFilter, WeatherStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = WeatherStore::new("Resources/hawaii.sqlite");
//!
//!     let rainy_days = store
//!         .run(|session| session.observations(&ObservationFilter::new().with_precipitation()))
//!         .await?;
//!
//!     println!("{} readings with precipitation", rainy_days.len());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod sqlite;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{StoreError, StoreResult};
pub use sqlite::{Session, WeatherStore};
pub use types::{
    Observation, ObservationFilter, Station, StationActivity, TemperatureStats, DATE_FORMAT,
};
