use axum::{extract::State, http::StatusCode, response::Json};
use tracing::info;

use crate::handlers::common::{dispatch_error, telemetry_error, ErrorResponse};
use crate::state::AppState;
use brewery_types::{DispatchReceipt, DispatchRequest, Forecast};

/// Time-to-full forecast for every cauldron still filling. Returned in
/// catalog order; consumers sort as needed.
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/logistics/forecast",
    responses(
        (status = 200, description = "Fill-time forecasts", body = [Forecast]),
        (status = 500, description = "Unrecognized live-data format", body = ErrorResponse),
        (status = 502, description = "Upstream unavailable", body = ErrorResponse)
    ),
    tag = "logistics"
))]
/// GET /logistics/forecast
pub async fn get_forecast(
	State(state): State<AppState>,
) -> Result<Json<Vec<Forecast>>, (StatusCode, Json<ErrorResponse>)> {
	let forecasts = state
		.status_service
		.forecast()
		.await
		.map_err(telemetry_error)?;
	Ok(Json(forecasts))
}

/// Dispatch a courier to a cauldron. Simulation only; nothing mutates.
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/logistics/dispatch",
    request_body = DispatchRequest,
    responses(
        (status = 200, description = "Courier dispatched", body = DispatchReceipt),
        (status = 400, description = "Unknown cauldron id", body = ErrorResponse)
    ),
    tag = "logistics"
))]
/// POST /logistics/dispatch
pub async fn post_dispatch(
	State(state): State<AppState>,
	Json(request): Json<DispatchRequest>,
) -> Result<Json<DispatchReceipt>, (StatusCode, Json<ErrorResponse>)> {
	info!("Dispatch requested for '{}'", request.cauldron_id);
	let receipt = state
		.dispatch_service
		.dispatch(&request.cauldron_id)
		.map_err(dispatch_error)?;
	Ok(Json(receipt))
}
