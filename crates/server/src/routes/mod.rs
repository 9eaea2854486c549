//! API route handlers
//!
//! This module contains all HTTP endpoint implementations for the Exemplar
//! server. Routes are organized by functionality:
//!
//! - `health`: Health checks and readiness
//! - `search`: Semantic example search

pub mod health;
pub mod search;

use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::error::{ServerError, ServerResult};

/// API version and base info
///
/// Returns server information including version and available endpoints.
/// This is the root endpoint (GET /).
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "Exemplar Server",
        "version": env!("CARGO_PKG_VERSION"),
        "api_version": "v1",
        "endpoints": [
            "/api/v1/search",
            "/health",
            "/ready"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}

/// 405 Method Not Allowed handler
///
/// Returned when a known route is hit with the wrong HTTP method, e.g.
/// `GET /api/v1/search`.
pub async fn method_not_allowed() -> ServerError {
    ServerError::MethodNotAllowed
}
