use axum::{extract::State, http::StatusCode, response::Json};

use crate::handlers::common::{telemetry_error, ErrorResponse};
use crate::state::AppState;
use brewery_types::StatusRecord;

/// Merged status plus percent-full and estimated time-to-full.
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/assets/status",
    responses(
        (status = 200, description = "Per-cauldron status report", body = [StatusRecord]),
        (status = 500, description = "Unrecognized live-data format", body = ErrorResponse),
        (status = 502, description = "Upstream unavailable", body = ErrorResponse)
    ),
    tag = "assets"
))]
/// GET /assets/status
pub async fn get_status(
	State(state): State<AppState>,
) -> Result<Json<Vec<StatusRecord>>, (StatusCode, Json<ErrorResponse>)> {
	let report = state
		.status_service
		.status_report()
		.await
		.map_err(telemetry_error)?;
	Ok(Json(report))
}
