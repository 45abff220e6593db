use axum::{http::StatusCode, response::Json};
use brewery_types::{DispatchError, TelemetryError};
use serde::Serialize;
use tracing::warn;
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Error response format shared by handlers
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
	pub timestamp: i64,
}

impl ErrorResponse {
	pub fn new(error: &str, message: impl ToString) -> Self {
		Self {
			error: error.to_string(),
			message: message.to_string(),
			timestamp: chrono::Utc::now().timestamp(),
		}
	}
}

/// Map a telemetry failure onto the API error taxonomy: unrecognized
/// payload shapes are our format problem (500), everything else is an
/// upstream outage (502). Neither is ever served as an empty success.
pub fn telemetry_error(e: TelemetryError) -> (StatusCode, Json<ErrorResponse>) {
	if e.is_format_error() {
		warn!("Live-data format error: {}", e);
		(
			StatusCode::INTERNAL_SERVER_ERROR,
			Json(ErrorResponse::new("FORMAT_ERROR", e)),
		)
	} else {
		warn!("Upstream telemetry error: {}", e);
		(
			StatusCode::BAD_GATEWAY,
			Json(ErrorResponse::new("UPSTREAM_ERROR", e)),
		)
	}
}

/// Dispatch failures are client errors: the caller named an unknown
/// cauldron.
pub fn dispatch_error(e: DispatchError) -> (StatusCode, Json<ErrorResponse>) {
	(
		StatusCode::BAD_REQUEST,
		Json(ErrorResponse::new("UNKNOWN_CAULDRON", e)),
	)
}
