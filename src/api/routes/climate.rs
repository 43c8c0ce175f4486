//! Climate Routes
//!
//! Read-only queries over the observation store.
//!
//! - GET /api/v1.0/precipitation - Last year of precipitation
//! - GET /api/v1.0/stations - Stations ranked by observation count
//! - GET /api/v1.0/tobs - Last year of temperatures at the busiest station
//! - GET /api/v1.0/:start - Temperature stats from `start`
//! - GET /api/v1.0/:start/:end - Temperature stats from `start` to `end`

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{
    PrecipitationEntry, StationCountEntry, TemperatureEntry, TemperatureStatsResponse,
};
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /api/v1.0/precipitation
pub async fn precipitation(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<PrecipitationEntry>>> {
    let readings = state.service.precipitation().await?;
    Ok(Json(readings.into_iter().map(Into::into).collect()))
}

/// GET /api/v1.0/stations
pub async fn stations(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<StationCountEntry>>> {
    let ranking = state.service.stations().await?;
    Ok(Json(ranking.into_iter().map(Into::into).collect()))
}

/// GET /api/v1.0/tobs
pub async fn tobs(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<TemperatureEntry>>> {
    let readings = state.service.tobs().await?;
    Ok(Json(readings.into_iter().map(Into::into).collect()))
}

/// GET /api/v1.0/:start
pub async fn stats_from(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> ApiResult<Json<TemperatureStatsResponse>> {
    let stats = state.service.temperature_stats(&start, None).await?;
    Ok(Json(stats.into()))
}

/// GET /api/v1.0/:start/:end
pub async fn stats_between(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> ApiResult<Json<TemperatureStatsResponse>> {
    let stats = state
        .service
        .temperature_stats(&start, Some(&end))
        .await?;
    Ok(Json(stats.into()))
}
