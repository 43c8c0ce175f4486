//! Surfs Up REST API
//!
//! HTTP API layer, built with Axum. Every endpoint is a read-only GET.
//!
//! # Endpoints
//!
//! ## Climate
//! - `GET /` - Listing of available routes
//! - `GET /api/v1.0/precipitation` - Last year of precipitation
//! - `GET /api/v1.0/stations` - Stations ranked by observation count
//! - `GET /api/v1.0/tobs` - Last year of temperatures at the busiest station
//! - `GET /api/v1.0/:start` - TMIN/TAVG/TMAX from a start date
//! - `GET /api/v1.0/:start/:end` - TMIN/TAVG/TMAX between two dates
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use surfsup::api::{serve, AppState};
//! use surfsup::config::ApiConfig;
//! use surfsup::store::WeatherStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::default();
//!     let state = AppState::new(WeatherStore::new("Resources/hawaii.sqlite"), config.clone());
//!     serve(state, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/precipitation", get(routes::climate::precipitation))
        .route("/stations", get(routes::climate::stations))
        .route("/tobs", get(routes::climate::tobs))
        .route("/:start", get(routes::climate::stats_from))
        .route("/:start/:end", get(routes::climate::stats_between));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config);
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::home::index))
        .nest("/api/v1.0", api_routes)
        .nest("/health", health_routes)
        .fallback(routes::home::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// CORS for GET requests from the configured origins, or any origin when none are set
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET])
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Surfs Up API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Surfs Up API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::{create_fixture, obs, FixtureRow};
    use crate::store::WeatherStore;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn create_test_app(rows: &[FixtureRow]) -> (Router, tempfile::TempDir) {
        let (dir, store) = create_fixture(rows);
        let state = AppState::new(store, ApiConfig::default());
        (build_router(state), dir)
    }

    async fn fetch(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    async fn fetch_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let (status, body) = fetch(app, uri).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn sample_rows() -> Vec<FixtureRow> {
        vec![
            obs("S2", "2016-08-23", Some(1.2), 77.0),
            obs("S1", "2017-08-22", None, 79.0),
            obs("S1", "2017-08-23", Some(0.0), 81.0),
        ]
    }

    #[tokio::test]
    async fn test_home_lists_routes() {
        let (app, _dir) = create_test_app(&sample_rows());

        let (status, body) = fetch(app, "/").await;
        assert_eq!(status, StatusCode::OK);

        let text = String::from_utf8(body).unwrap();
        for path in routes::home::API_PATHS {
            assert!(text.contains(path), "missing {}", path);
        }
    }

    #[tokio::test]
    async fn test_precipitation() {
        let (app, _dir) = create_test_app(&sample_rows());

        let (status, body) = fetch_json(app, "/api/v1.0/precipitation").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([{"date": "2017-08-23", "prcp": 0.0}]));
    }

    #[tokio::test]
    async fn test_stations() {
        let (app, _dir) = create_test_app(&sample_rows());

        let (status, body) = fetch_json(app, "/api/v1.0/stations").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{"station": "S1", "count": 2}, {"station": "S2", "count": 1}])
        );
    }

    #[tokio::test]
    async fn test_tobs() {
        let (app, _dir) = create_test_app(&sample_rows());

        let (status, body) = fetch_json(app, "/api/v1.0/tobs").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                {"date": "2017-08-22", "temp": 79.0},
                {"date": "2017-08-23", "temp": 81.0}
            ])
        );
    }

    #[tokio::test]
    async fn test_stats_from_start() {
        let (app, _dir) = create_test_app(&sample_rows());

        let (status, body) = fetch_json(app, "/api/v1.0/2017-01-01").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"TMIN": 79.0, "TAVG": 80.0, "TMAX": 81.0}));
    }

    #[tokio::test]
    async fn test_stats_single_day_range() {
        let (app, _dir) = create_test_app(&[obs("S1", "2017-01-01", None, 70.0)]);

        let (status, body) = fetch_json(app, "/api/v1.0/2017-01-01/2017-01-01").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"TMIN": 70.0, "TAVG": 70.0, "TMAX": 70.0}));
    }

    #[tokio::test]
    async fn test_stats_no_data() {
        let (app, _dir) = create_test_app(&sample_rows());

        let (status, body) = fetch_json(app, "/api/v1.0/2030-01-01").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"TMIN": null, "TAVG": null, "TMAX": null}));
    }

    #[tokio::test]
    async fn test_stats_reversed_range_is_no_data() {
        let (app, _dir) = create_test_app(&sample_rows());

        let (status, body) = fetch_json(app, "/api/v1.0/2017-08-23/2016-01-01").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"TMIN": null, "TAVG": null, "TMAX": null}));
    }

    #[tokio::test]
    async fn test_stats_malformed_date() {
        let (app, _dir) = create_test_app(&sample_rows());

        let (status, body) = fetch_json(app, "/api/v1.0/2017-8-1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_DATE");
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_empty_dataset_is_server_error() {
        let (app, _dir) = create_test_app(&[]);

        let (status, body) = fetch_json(app, "/api/v1.0/precipitation").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "EMPTY_DATASET");
    }

    #[tokio::test]
    async fn test_store_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let store = WeatherStore::new(dir.path().join("missing.sqlite"));
        let app = build_router(AppState::new(store, ApiConfig::default()));

        let (status, body) = fetch_json(app.clone(), "/api/v1.0/stations").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "STORE_UNAVAILABLE");

        let (status, _) = fetch(app, "/health/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _dir) = create_test_app(&sample_rows());

        let (status, _) = fetch(app.clone(), "/health/live").await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = fetch(app.clone(), "/health/ready").await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = fetch_json(app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["observations"], 3);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (app, _dir) = create_test_app(&sample_rows());

        let (status, body) = fetch_json(app, "/api/v2/precipitation").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[test]
    fn test_cors_layer_with_origins() {
        let config = ApiConfig {
            cors_origins: vec!["http://localhost:3000".to_string()],
            ..ApiConfig::default()
        };
        // Builds without panicking for a concrete origin list
        let _ = cors_layer(&config);
    }
}
