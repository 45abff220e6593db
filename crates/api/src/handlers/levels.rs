use axum::{extract::State, http::StatusCode, response::Json};
use tracing::info;

use crate::handlers::common::{telemetry_error, ErrorResponse};
use crate::state::AppState;
use brewery_types::MergedStatus;

/// Current level of every catalog cauldron, merged with static metadata.
/// Polled by the dashboard.
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/assets/levels",
    responses(
        (status = 200, description = "Merged live levels", body = [MergedStatus]),
        (status = 500, description = "Unrecognized live-data format", body = ErrorResponse),
        (status = 502, description = "Upstream unavailable", body = ErrorResponse)
    ),
    tag = "assets"
))]
/// GET /assets/levels
pub async fn get_levels(
	State(state): State<AppState>,
) -> Result<Json<Vec<MergedStatus>>, (StatusCode, Json<ErrorResponse>)> {
	let merged = state
		.status_service
		.live_levels()
		.await
		.map_err(telemetry_error)?;

	info!("Returning live levels for {} cauldron(s)", merged.len());
	Ok(Json(merged))
}
