use axum::{extract::State, http::StatusCode, response::Json};
use tracing::info;

use crate::handlers::common::{telemetry_error, ErrorResponse};
use crate::state::AppState;
use brewery_types::Alert;

/// Reconcile logged tickets against the drain history.
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/tickets/discrepancies",
    responses(
        (status = 200, description = "Alerts, or a single all-clear record", body = [Alert]),
        (status = 502, description = "Upstream unavailable", body = ErrorResponse)
    ),
    tag = "tickets"
))]
/// GET /tickets/discrepancies
pub async fn get_discrepancies(
	State(state): State<AppState>,
) -> Result<Json<Vec<Alert>>, (StatusCode, Json<ErrorResponse>)> {
	let alerts = state
		.reconcile_service
		.check()
		.await
		.map_err(telemetry_error)?;

	if alerts.is_empty() {
		return Ok(Json(vec![Alert::all_clear()]));
	}

	info!("Reporting {} reconciliation alert(s)", alerts.len());
	Ok(Json(alerts))
}
