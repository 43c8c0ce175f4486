//! Home Routes
//!
//! - GET / - Plain-text listing of the available API paths
//! - Fallback - JSON 404 for unknown paths

use axum::http::Uri;

use crate::api::error::ApiError;

/// Paths served under the API, in listing order
pub const API_PATHS: &[&str] = &[
    "/api/v1.0/precipitation",
    "/api/v1.0/stations",
    "/api/v1.0/tobs",
    "/api/v1.0/<start>",
    "/api/v1.0/<start>/<end>",
];

/// GET /
pub async fn index() -> String {
    let mut listing = String::from("Available routes:\n");
    for path in API_PATHS {
        listing.push_str(path);
        listing.push('\n');
    }
    listing
}

/// Any unmatched path
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}
