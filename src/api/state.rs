//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::config::ApiConfig;
use crate::query::QueryService;
use crate::store::WeatherStore;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
///
/// Holds no open connections; each request opens its own store session.
#[derive(Clone)]
pub struct AppState {
    /// Climate queries over the observation store
    pub service: Arc<QueryService>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState over `store`
    pub fn new(store: WeatherStore, config: ApiConfig) -> Self {
        Self {
            service: Arc::new(QueryService::new(store)),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// The observation store handle
    pub fn store(&self) -> &WeatherStore {
        self.service.store()
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
