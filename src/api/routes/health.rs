//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (store opens and has the expected schema)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;
use crate::store::StoreError;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Kubernetes readiness probe.
/// Returns 200 if the store can be opened and its schema matches.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    match check_store(&state).await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// GET /health
///
/// Full health status with store details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let (status, store, observations) = match check_store(&state).await {
        Ok(count) => (StatusCode::OK, "ok".to_string(), Some(count)),
        Err(e) => (StatusCode::SERVICE_UNAVAILABLE, e.to_string(), None),
    };

    let overall = if status == StatusCode::OK {
        "healthy"
    } else {
        "unhealthy"
    };

    (
        status,
        Json(HealthResponse {
            status: overall.to_string(),
            store,
            observations,
            uptime_seconds: state.uptime_seconds(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Verify the schema and count observations in one session
async fn check_store(state: &AppState) -> Result<u64, StoreError> {
    state
        .store()
        .run(|session| {
            session.verify_schema()?;
            session.observation_count()
        })
        .await
}
