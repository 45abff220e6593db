use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;

use crate::state::AppState;

/// Health check endpoint
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service healthy", body = String)),
    tag = "health"
))]
pub async fn health() -> &'static str {
	"OK"
}

/// Readiness response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
	pub status: String,
	pub upstream_healthy: bool,
	pub cauldrons: usize,
}

/// GET /ready - Readiness probe that pings the upstream live-data feed
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/ready",
    responses((status = 200, description = "Readiness response")),
    tag = "health"
))]
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
	let upstream_healthy = state.status_service.live_levels().await.is_ok();
	let status = if upstream_healthy { "ready" } else { "degraded" };

	let body = ReadinessResponse {
		status: status.to_string(),
		upstream_healthy,
		cauldrons: state.catalog.len(),
	};
	let code = if upstream_healthy {
		StatusCode::OK
	} else {
		StatusCode::SERVICE_UNAVAILABLE
	};
	(code, Json(body))
}
