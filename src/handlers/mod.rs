//! # API Handlers
//!
//! This module contains all the HTTP endpoint handlers for the Hawkeye
//! management service.

use axum::{extract::State, http::StatusCode, response::Json};

use crate::models::ServiceInfo;
use crate::server::AppState;

pub mod monitors;

/// Root handler that returns basic service information
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service information", body = ServiceInfo)
    ),
    tag = "root"
)]
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo::default())
}

/// Health check handler that verifies database connectivity
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Service is healthy"),
        (status = 503, description = "Database unavailable")
    ),
    tag = "root"
)]
pub async fn healthz(State(state): State<AppState>) -> StatusCode {
    match crate::db::health_check(&state.db).await {
        Ok(()) => StatusCode::OK,
        Err(err) => {
            tracing::error!(error = %err, "Health check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
